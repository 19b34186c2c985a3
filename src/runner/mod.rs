pub mod engine;
pub mod launcher;
pub mod strategy;

pub use engine::{AttemptRecord, AttemptStatus, RunReport, TieredTestRunner};
pub use launcher::{ProcessLauncher, ScriptedLauncher, SystemProcessLauncher};
pub use strategy::{default_tiers, InvocationStrategy};
