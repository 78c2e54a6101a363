//! Portal assembly: snapshot loops in, html fragments out
pub mod loops;
pub mod pages;
