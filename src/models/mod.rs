//! Data models for the book store

pub mod book;
