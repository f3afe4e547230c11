use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use stp_cli::pipeline::{self, CleanedTable};
use stp_cli::settings::Settings;
use stp_cli::summary::{print_mapping, print_preview};
use stp_submit::{ActorClient, RunStarted};

use crate::cli::{CleanArgs, ResolveArgs, SendArgs};
use crate::types::{CleanResult, SendResult};

pub fn run_resolve(args: &ResolveArgs, settings: &Settings) -> Result<()> {
    let span = info_span!("resolve", input = %args.input.display());
    let _guard = span.enter();
    let resolver = settings.resolver.build_resolver()?;
    let table = pipeline::ingest(&args.input)?;
    let mapping = pipeline::resolve(&table, &resolver);

    if args.json {
        let json = serde_json::to_string_pretty(&mapping).context("serialize mapping")?;
        println!("{json}");
    } else {
        print_mapping(&mapping);
        let missing = mapping.missing_required();
        if !missing.is_empty() {
            let labels: Vec<String> = missing.iter().map(ToString::to_string).collect();
            println!("Missing required fields: {}", labels.join(", "));
        }
    }
    Ok(())
}

pub fn run_clean(args: &CleanArgs, settings: &Settings) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let resolver = settings.resolver.build_resolver()?;
    // Credentials are checked before any file is written.
    let client = if args.send && !args.dry_run {
        Some(actor_client(settings)?)
    } else {
        None
    };
    if args.send && args.dry_run {
        warn!("--dry-run set, the cleaned file will not be sent");
    }

    let CleanedTable {
        output,
        input_rows,
        ..
    } = pipeline::clean_file(&args.input, &resolver)?;
    print_preview(&output, args.preview);

    let mut result = CleanResult {
        input: args.input.clone(),
        output: None,
        input_rows,
        output_rows: output.len(),
        run: None,
    };

    if args.dry_run {
        info!(
            rows = output.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "dry run complete"
        );
        return Ok(result);
    }

    let path = pipeline::output_path(&args.input, args.output.as_deref())?;
    pipeline::write_output(&output, &path)?;
    result.output = Some(path);

    if let Some(client) = client {
        let csv = stp_output::to_csv_bytes(&output).context("serialize cleaned CSV")?;
        result.run = Some(start_run(&client, csv)?);
    }

    info!(
        rows = result.output_rows,
        elapsed_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(result)
}

pub fn run_send(args: &SendArgs, settings: &Settings) -> Result<SendResult> {
    let span = info_span!("send", input = %args.input.display());
    let _guard = span.enter();
    let client = actor_client(settings)?;
    let csv = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let bytes = csv.len();
    let run = start_run(&client, csv)?;
    Ok(SendResult {
        input: args.input.clone(),
        bytes,
        run,
    })
}

fn actor_client(settings: &Settings) -> Result<ActorClient> {
    ActorClient::new(&settings.apify).context("skip-trace actor is not configured")
}

fn start_run(client: &ActorClient, csv: Vec<u8>) -> Result<RunStarted> {
    client.start_run(csv).context("skip-trace submission failed")
}
