use crate::infra::parse_profile;
use clap::Args;
use profile_intake::catalog::catalog;
use profile_intake::error::AppError;
use profile_intake::submissions::filter::{decode_query, parse_query_string, to_query_string};
use profile_intake::submissions::query::translate;
use profile_intake::submissions::store::load_snapshot;
use profile_intake::submissions::{
    MemorySubmissionStore, Predicate, SearchPage, StoreProfile, Submission, SubmissionService,
    SubmissionServiceError, SubmissionStore,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QueryArgs {
    /// JSON snapshot of submissions (an array, as written by the file store)
    #[arg(long)]
    pub(crate) data: PathBuf,
    /// Transport query string, e.g. "skills=Go,Rust&skillCombination=all"
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Capability preset the query is evaluated under
    #[arg(long, value_parser = parse_profile, default_value = "full")]
    pub(crate) profile: StoreProfile,
}

/// Printed result of the `query` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryReport {
    pub(crate) profile: StoreProfile,
    pub(crate) normalized_query: String,
    pub(crate) native: Vec<Predicate>,
    pub(crate) deferred: Vec<Predicate>,
    pub(crate) result: SearchPage,
}

pub(crate) fn run_query(args: QueryArgs) -> Result<(), AppError> {
    let records = load_snapshot(&args.data)?;
    let report = execute_query(records, args.profile, args.query.as_deref().unwrap_or_default())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn execute_query(
    records: Vec<Submission>,
    profile: StoreProfile,
    raw_query: &str,
) -> Result<QueryReport, AppError> {
    let store = Arc::new(MemorySubmissionStore::from_records(
        profile.capabilities(),
        records,
    )?);
    let service = SubmissionService::new(store.clone());

    let query = decode_query(&parse_query_string(raw_query), service.search_config())
        .map_err(SubmissionServiceError::from)?;
    let translated = translate(&query.filter, &store.capabilities());
    let result = service.search(&query)?;

    Ok(QueryReport {
        profile,
        normalized_query: to_query_string(&query.filter),
        native: translated.native,
        deferred: translated.deferred,
        result,
    })
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(catalog())?);
    Ok(())
}
