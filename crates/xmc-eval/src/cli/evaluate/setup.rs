//! Evaluator setup: config overrides and label space loading.

use xmc_eval_core::{Config, EvaluationOptions, Evaluator, LabelSpace};

use super::{EvalContext, EvaluateArgs};

/// Load config, apply CLI overrides, load the label space, and build the evaluator.
pub fn setup_evaluator(args: &EvaluateArgs) -> anyhow::Result<EvalContext> {
    if !args.corpus.exists() {
        anyhow::bail!(
            "Corpus file does not exist: {:?}\n\n  Hint: Check the file path and try again.",
            args.corpus
        );
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, args);
    config.validate()?;

    let label_file = match &args.labels {
        Some(path) => path.clone(),
        None => match config.label_file() {
            Some(path) => path,
            None => anyhow::bail!(
                "No label file given.\n\n  Hint: Pass --labels <FILE> or set `labels.file` in {}",
                Config::default_path().display()
            ),
        },
    };

    let labels = LabelSpace::load(&label_file, &config.labels)?;
    let options = EvaluationOptions::from_config(&config)?;

    tracing::debug!(
        "Evaluation options: k = {:?}, precision = {:?}, transform = {:?}, workers = {}",
        options.cutoffs.as_slice(),
        options.precision_convention,
        options.score_transform,
        options.parallel_workers,
    );

    Ok(EvalContext {
        evaluator: Evaluator::new(labels, options),
        config,
    })
}

/// Fold CLI flags into the loaded configuration.
fn apply_overrides(config: &mut Config, args: &EvaluateArgs) {
    if !args.k.is_empty() {
        config.evaluation.k_values = args.k.clone();
    }
    if let Some(precision) = args.precision {
        config.evaluation.precision_convention = precision.into();
    }
    if let Some(transform) = args.transform {
        config.evaluation.score_transform = transform.into();
    }
    if let Some(name) = &args.ensemble_name {
        config.evaluation.ensemble_name = name.clone();
    }
    if !args.members.is_empty() {
        config.evaluation.members = args.members.clone();
    }
    if let Some(n) = args.truncate_labels {
        config.labels.truncate_to = Some(n);
    }
    if args.no_header {
        config.labels.has_header = false;
    }
    if let Some(parallel) = args.parallel {
        config.processing.parallel_workers = parallel;
    }
    if let Some(format) = args.format {
        config.output.format = format.to_string();
    }
}
