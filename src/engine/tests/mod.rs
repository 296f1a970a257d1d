mod common;
mod rollup;
