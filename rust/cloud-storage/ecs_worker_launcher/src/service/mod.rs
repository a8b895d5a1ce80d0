pub mod ecs;
pub mod sqs;
