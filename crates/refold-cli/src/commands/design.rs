use anyhow::Context;
use tracing::info;

use crate::cli::DesignArgs;
use crate::config::{self, FileConfig};
use crate::error::{CliError, Result};
use crate::{report, ui};
use refold::core::models::sequence::NucleotideSequence;
use refold::core::models::structure::TargetStructure;
use refold::engine::backends::register_builtins;
use refold::engine::progress::ProgressReporter;
use refold::engine::provider::{
    RandomStartProvider, StartProvider, StartRequest, TemplateStartProvider,
};
use refold::engine::registry::BackendRegistry;
use refold::workflows::design;

pub fn run(args: DesignArgs) -> Result<()> {
    let target = load_target(&args)?;
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let resolved = config::resolve(&args, file, target)?;

    let mut registry = BackendRegistry::new();
    register_builtins(&mut registry, resolved.seed);
    let backend = registry.create(&resolved.backend, &resolved.config)?;

    let (mut provider, request): (Box<dyn StartProvider>, StartRequest) = match &args.start {
        Some(start) => {
            let template = NucleotideSequence::parse(start)?;
            let request = if args.partial {
                StartRequest::Partial
            } else {
                StartRequest::Complete
            };
            (
                Box::new(TemplateStartProvider::new(template, resolved.seed)),
                request,
            )
        }
        None => (
            Box::new(RandomStartProvider::new(resolved.seed)),
            StartRequest::Complete,
        ),
    };

    info!(
        backend = %resolved.backend,
        count = resolved.count,
        "running design search"
    );

    let bar = (!args.no_progress).then(|| ui::design_bar(resolved.count as u64));
    let reporter = match &bar {
        Some(bar) => ProgressReporter::with_callback(ui::progress_callback(bar)),
        None => ProgressReporter::new(),
    };

    let run_report = design::run(
        &resolved.config,
        backend,
        provider.as_mut(),
        request,
        resolved.count,
        &reporter,
    )?;

    println!("start: {}", run_report.start);
    for record in &run_report.records {
        println!(
            "{:>4}  {}  d={} gc={:.2}",
            record.index, record.sequence, record.hamming_distance, record.gc_fraction
        );
    }

    if let Some(path) = &args.output {
        report::write_csv(path, &run_report)?;
        info!(path = %path.display(), "CSV report written");
    }

    Ok(())
}

fn load_target(args: &DesignArgs) -> Result<TargetStructure> {
    let notation = match (&args.target, &args.target_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading target structure from '{}'", path.display()))?;
            content
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty() && !line.starts_with('>'))
                .ok_or_else(|| {
                    CliError::Config(format!("'{}' contains no structure line", path.display()))
                })?
                .to_string()
        }
        (None, None) => {
            return Err(CliError::Config(
                "a target structure is required (--target or --target-file)".to_string(),
            ));
        }
    };
    Ok(TargetStructure::parse(&notation)?)
}
