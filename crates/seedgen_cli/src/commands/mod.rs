//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands pick the step
//! algorithm at runtime from [`CliConfig`](crate::config::CliConfig) and then
//! run a monomorphised body via `with_root_seed!`.

/// Binds `$seed` to the configured root seed under the configured algorithm
/// and evaluates `$body` once per algorithm arm.
macro_rules! with_root_seed {
    ($config:expr, $seed:ident => $body:expr) => {
        match $config.algorithm {
            seedgen_core::AlgorithmKind::Pcg32 => {
                let $seed = seedgen_core::Seed::<seedgen_core::Pcg32>::from_int($config.seed);
                $body
            }
            seedgen_core::AlgorithmKind::Lcg64 => {
                let $seed = seedgen_core::Seed::<seedgen_core::Lcg64>::from_int($config.seed);
                $body
            }
        }
    };
}

pub mod check;
pub mod sample;
pub mod stream;
