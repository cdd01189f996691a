//! CLI smoke and demo entry point.
//!
//! # Responsibility
//! - Verify `romix_core` linkage with deterministic output.
//! - Run one feature feed end-to-end against the in-process collaborators.

use clap::{Parser, Subcommand};
use romix_core::{
    ApiFeedRepository, FakeApiService, FakeNetworkClient, FeatureConfig, FeatureDescriptor,
    FeatureRegistry, FeedService, SequentialUserFactory, UiModel,
};
use std::process::ExitCode;

const PROBE_FEATURE: &str = "feat0";

type CliFeedService = FeedService<
    ApiFeedRepository<FakeApiService<FakeNetworkClient>>,
    FakeNetworkClient,
    SequentialUserFactory,
>;

#[derive(Parser, Debug)]
#[command(name = "romix", version, about = "Romix feed core smoke tool")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the core health-check reply.
    Ping,
    /// Print the core crate version.
    Version,
    /// Build the feed screen for one user.
    Feed {
        /// Feature module id, e.g. feat601.
        #[arg(long, default_value = "feat601")]
        feature: String,
        /// User id to fetch.
        #[arg(long)]
        user: i64,
    },
    /// Run the synthetic-user demo flow.
    Demo {
        /// Feature module id, e.g. feat601.
        #[arg(long, default_value = "feat601")]
        feature: String,
        /// Number of synthetic users.
        #[arg(long, default_value_t = 5)]
        users: usize,
    },
    /// Issue a raw GET through the in-process network client.
    Probe {
        /// Request path starting with `/`.
        path: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Ping => println!("romix_core ping={}", romix_core::ping()),
        Command::Version => println!("romix_core version={}", romix_core::core_version()),
        Command::Feed { feature, user } => {
            let state = feature_service(&feature)?
                .build_ui_for_user(user)
                .map_err(|err| err.to_string())?;
            print_model(&state.into_model());
        }
        Command::Demo { feature, users } => {
            let state = feature_service(&feature)?.demo_complex_flow(users);
            print_model(&state.into_model());
        }
        Command::Probe { path } => {
            let code = feature_service(PROBE_FEATURE)?
                .ping(&path)
                .map_err(|err| err.to_string())?;
            println!("status={code}");
        }
    }
    Ok(())
}

/// Wires one feature over the in-process collaborators with env overrides.
fn feature_service(feature: &str) -> Result<CliFeedService, String> {
    let descriptor = FeatureDescriptor::parse(feature).map_err(|err| err.to_string())?;
    let config = FeatureConfig::from_env().map_err(|err| err.to_string())?;
    let mut registry = FeatureRegistry::new();
    registry
        .register(descriptor, config)
        .map_err(|err| err.to_string())?;
    let registered = registry.get(feature).map_err(|err| err.to_string())?;
    let service = registered
        .build_service(
            FakeApiService::default(),
            FakeNetworkClient::new(),
            SequentialUserFactory,
        )
        .map_err(|err| err.to_string())?;
    Ok(service)
}

fn print_model(model: &UiModel) {
    println!("{}", model.header.as_str());
    for item in &model.items {
        match &item.subtitle {
            Some(subtitle) => println!("{} [{subtitle}]", item.title),
            None => println!("{}", item.title),
        }
    }
    if let Some(error) = &model.error {
        println!("error={error}");
    }
}
