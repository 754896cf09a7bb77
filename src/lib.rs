//! crowdnest
//!
//! 众筹创作者后台：项目生命周期与审核状态引擎。
//!
//! Bootstrap (config, tracing, wiring) and the command line front end over
//! the `cn-app` project status services.

pub mod bootstrap;
pub mod cli;
