use clap::Parser;

use dc_validator::config::{BatchArgs, Cli, Command, ExampleArgs, OutputFormat, ValidateArgs};
use dc_validator::core::sample::SAMPLE_DOCUMENT;
use dc_validator::core::{run_batch, validate_file, validate_source, BatchOptions};
use dc_validator::output::Renderer;
use dc_validator::utils::{logger, validation::Validate};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli.command);

    let renderer = Renderer::from_env(cli.no_color);

    let exit_code = match cli.command {
        Command::Validate(args) => cmd_validate(args, &renderer)?,
        Command::Batch(args) => cmd_batch(args, &renderer)?,
        Command::Example(args) => cmd_example(args, &renderer)?,
        Command::Info => {
            print!("{}", info_text());
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs, renderer: &Renderer) -> anyhow::Result<i32> {
    if let Err(e) = args.validate() {
        tracing::error!("Argument validation failed: {}", e);
        eprintln!("❌ {e}");
        return Ok(1);
    }

    tracing::info!("Validating {}", args.file.display());
    let report = validate_file(&args.file);

    match args.format {
        OutputFormat::Json => {
            // Compact JSON in quiet mode, for piping.
            println!("{}", renderer.render_json(&report, !args.quiet)?);
        }
        OutputFormat::Table => {
            if !args.quiet {
                match &report.summary {
                    Some(summary) => {
                        print!("{}", renderer.render_element_table(&summary.element_counts))
                    }
                    None => print!("{}", renderer.render_summary(&report, false)),
                }
            }
        }
        OutputFormat::Detailed => {
            if !args.quiet {
                print!("{}", renderer.render_summary(&report, true));
            }
        }
        OutputFormat::Summary => {
            if !args.quiet {
                print!("{}", renderer.render_summary(&report, args.details));
            }
        }
    }

    if let Some(output) = &args.output {
        std::fs::write(output, renderer.render_json(&report, true)?)?;
        if !args.quiet {
            println!("📁 Results saved to: {}", output.display());
        }
    }

    if report.validation_status.is_passed() {
        Ok(0)
    } else {
        if args.quiet && args.format != OutputFormat::Json {
            let error = report.error.as_deref().unwrap_or("unknown error");
            eprintln!("❌ Validation failed: {error}");
        }
        Ok(1)
    }
}

fn cmd_batch(args: BatchArgs, renderer: &Renderer) -> anyhow::Result<i32> {
    if let Err(e) = args.validate() {
        tracing::error!("Argument validation failed: {}", e);
        eprintln!("❌ {e}");
        return Ok(1);
    }

    let options = BatchOptions {
        pattern: args.pattern.clone(),
        recursive: args.recursive,
        fail_fast: args.fail_fast,
    };
    let report = run_batch(&args.directory, &options)?;

    if report.results.is_empty() {
        println!(
            "{}",
            renderer.notice(&format!(
                "No files found matching pattern: {}",
                args.pattern
            ))
        );
        return Ok(0);
    }

    if !args.summary_only {
        for result in &report.results {
            println!("{}", renderer.render_batch_line(result));
        }
        println!();
    }
    print!("{}", renderer.render_batch_summary(&report.summary));

    if let Some(output) = &args.output {
        std::fs::write(output, renderer.render_json(&report, true)?)?;
        println!("📁 Batch results saved to: {}", output.display());
    }

    Ok(if report.summary.failed > 0 { 1 } else { 0 })
}

fn cmd_example(args: ExampleArgs, renderer: &Renderer) -> anyhow::Result<i32> {
    match &args.save {
        Some(path) => {
            std::fs::write(path, SAMPLE_DOCUMENT)?;
            println!("📁 Example YAML saved to: {}", path.display());
        }
        None => print!("{SAMPLE_DOCUMENT}"),
    }

    if args.no_validate {
        return Ok(0);
    }

    println!("\nValidating example document...");
    let report = validate_source(SAMPLE_DOCUMENT, "<example>");
    print!("{}", renderer.render_summary(&report, false));
    Ok(if report.validation_status.is_passed() { 0 } else { 1 })
}

fn info_text() -> String {
    "\
Dublin Core YAML Metadata Validator

Validates YAML files against the Dublin Core metadata standard with
additional ISO standard compliance checks.

Supported Dublin Core elements:
  title, creator, subject, description, publisher, contributor, date,
  type, format, identifier, source, language, relation, coverage, rights

Additional features:
  - ISO compliance: 639-1 language codes, 3166-1 country codes,
    8601 dates, 26324 (DOI), 2108 (ISBN), 3297 (ISSN), 27729 (ORCID)
  - Extended metadata blocks: funding, quality, technical, preservation
  - Batch processing with glob patterns and recursive search
  - Output formats: summary, detailed, table, JSON

Validation levels:
  1. Syntax      - YAML structure
  2. Schema      - element layout and controlled vocabularies
  3. Format      - identifier and date formats
  4. Completeness - per-element population statistics
"
    .to_string()
}
