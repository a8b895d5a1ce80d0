//! Lambda which forwards S3 object creation notifications to an SQS queue and starts an ECS
//! task to work through the queued notifications.

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod logging;
pub mod notification;
pub mod service;
pub mod settings;
pub mod whitelist;
