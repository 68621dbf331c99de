//! Farmabot - Pharmacy customer-service chatbot
//!
//! Answers questions from a keyword-scored FAQ, escalates to a human on
//! request, and collects contact details into persisted support tickets.
//! Each conversation is tracked independently.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
