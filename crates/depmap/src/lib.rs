//! depmap - Service dependency topology analysis.
//!
//! This crate provides both a CLI application and a library that records
//! directed service-to-service dependency edges and analyzes the resulting
//! graph: cycles, single points of failure, chain depth, critical paths,
//! blast radius and an overall health classification.
//!
//! The entry point for library use is [`mapper::DependencyMapper`]; hosts
//! that serve concurrent requests use [`storage::SharedMapper`] through the
//! [`storage::TopologyService`] trait.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod id_generation;
pub mod mapper;
pub mod report;
pub mod storage;

// Public CLI modules (needed by binary)
pub mod app;
pub mod cli;
pub mod output;
