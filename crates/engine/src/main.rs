//! CultureLab Engine - stdin roleplay runner.
//!
//! Usage: `culturelab-engine [TEMPLATE_ID] [CULTURE_ID]`, then type one
//! utterance per line. Each feedback packet is printed as JSON.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use culturelab_domain::{CultureId, ScenarioTemplateId};
use culturelab_engine::infrastructure::{
    clock::SystemClock, config::EngineConfig, knowledge_base::KnowledgeBase,
    rewards::StubRewardIssuer,
};
use culturelab_engine::App;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_TEMPLATE: &str = "SCEN001";
const DEFAULT_CULTURE: &str = "GERMANY";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "culturelab_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting CultureLab Engine");

    let config = EngineConfig::from_env();
    let knowledge_base = KnowledgeBase::load(config.knowledge_base_path())
        .context("failed to load knowledge base")?;

    let mut args = std::env::args().skip(1);
    let template_id = ScenarioTemplateId::new(
        args.next().unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
    )?;
    let culture_id = CultureId::new(args.next().unwrap_or_else(|| DEFAULT_CULTURE.to_string()))?;

    let app = App::in_memory(
        knowledge_base,
        config,
        Arc::new(StubRewardIssuer::new()),
        Arc::new(SystemClock::new()),
    );
    let user_id = app.config.default_user.clone();

    let scenario = app
        .use_cases
        .scenario
        .start
        .execute(&user_id, &template_id, &culture_id)
        .await?;
    println!("{}", scenario.current_situation());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let processed = app
            .use_cases
            .scenario
            .process
            .execute(&user_id, scenario.id(), line.trim())
            .await?;
        println!("{}", serde_json::to_string_pretty(&processed.feedback)?);

        if let Some(certificate) = &processed.certificate {
            println!("{}", serde_json::to_string_pretty(certificate)?);
        }
        if processed.outcome.is_completed() {
            tracing::info!(
                success_metric = %processed.outcome.success_metric(),
                "Scenario finished"
            );
            break;
        }
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
