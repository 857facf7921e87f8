use anyhow::{Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use templatefaker::cli::{Cli, fmt};
use templatefaker::generator::TemplateDrawer;
use templatefaker::io::{DrawWriter, read_templates};
use templatefaker::models::{ModelParams, PairedModel, UnpairedModel};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or(0);

    let params = ModelParams::new(cli.fraction_even, cli.low_score_bias)?;

    if cli.verbose {
        eprintln!("{}", fmt::header("TemplateFaker Configuration"));
        eprintln!("{}: {}", fmt::param_aligned("Input", 16), cli.input.display());
        match &cli.output {
            Some(output) => eprintln!("{}: {}", fmt::param_aligned("Output", 16), output.display()),
            None => eprintln!("{}: stdout", fmt::param_aligned("Output", 16)),
        }
        eprintln!("{}: {}", fmt::param_aligned("Number of draws", 16), cli.num_draws);
        if let Some(max_templates) = cli.max_templates {
            eprintln!("{}: {}", fmt::param_aligned("Max templates", 16), max_templates);
        }
        eprintln!("{}: {:.2}", fmt::param_aligned("Fraction even", 16), params.fraction_even);
        eprintln!("{}: {:.2}", fmt::param_aligned("Low score bias", 16), params.low_score_bias);
        if let Some(seed) = cli.seed {
            eprintln!("{}: {}", fmt::param_aligned("Random seed", 16), seed);
        }
        eprintln!();
    }

    if cli.verbose {
        eprintln!("{}", fmt::progress("Extracting templates from input alignments..."));
    }
    let templates = read_templates(&cli.input, cli.max_templates, seed)?;

    let unpaired_model =
        UnpairedModel::from_params(&templates.unpaired, templates.unpaired_seen, &params);
    let paired_model = PairedModel::from_params(&templates.paired, templates.paired_seen, &params);

    if cli.verbose {
        eprintln!("Template Models:");
        eprintln!(
            "{}: {} added, {} kept, avg length {:.1}, max length {}",
            fmt::param_aligned("Unpaired", 10),
            unpaired_model.num_added(),
            unpaired_model.templates().len(),
            unpaired_model.avg_len(),
            unpaired_model.max_len()
        );
        eprintln!(
            "{}: {} added, {} kept, avg length {:.1}, max length {}",
            fmt::param_aligned("Paired", 10),
            paired_model.num_added(),
            paired_model.templates().len(),
            paired_model.avg_len(),
            paired_model.max_len()
        );
        if templates.orphaned_mates > 0 {
            eprintln!(
                "{}",
                fmt::warning(format!(
                    "{} properly paired records had no mate in the input",
                    templates.orphaned_mates
                ))
            );
        }
        eprintln!();
    }

    let drawer = TemplateDrawer::new(&unpaired_model, &paired_model);
    if cli.num_draws > 0 && unpaired_model.is_empty() && paired_model.is_empty() {
        bail!("No usable templates found in {}", cli.input.display());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut writer = DrawWriter::new(cli.output.as_deref())?;

    if cli.verbose {
        eprintln!("{}", fmt::progress(format!("Drawing {} templates...", cli.num_draws)));
    }

    for _ in 0..cli.num_draws {
        let Some(drawn) = drawer.next_draw(&mut rng) else {
            break;
        };
        writer.write_draw(&drawn)?;
    }
    writer.flush()?;

    if cli.verbose {
        let destination = cli
            .output
            .as_ref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
        eprintln!("{}", fmt::success(format!("Draws written to {}", destination)));
    }

    Ok(())
}
