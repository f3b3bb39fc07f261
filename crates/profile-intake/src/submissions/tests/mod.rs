mod common;
mod filtering;
