//! Tool to excise or extract short motifs from long sequencing reads
pub mod config;
pub mod errors;
pub mod handling;
pub mod input;
pub mod match_type;
pub mod matching;
pub mod output;
pub mod patterns;
pub mod pipeline;
pub mod reads;
pub mod splice;
pub mod stat;
#[macro_use]
extern crate clap;
