//! Common library exports shared between the mapper core and its harnesses.

extern crate serde;


pub mod form_snapshot;
pub mod city;
pub mod query_params;
pub mod code_tables;
pub mod range;
pub mod mapper;
