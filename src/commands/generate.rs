use std::path::Path;

use anyhow::Result;

use assetgen::{GenerateOptions, GenerateUseCase, GeneratorConfig};

use crate::ui::components::diff::render_output_diff;
use crate::ui::context::UiContext;
use crate::ui::views::generate::{render_generate_header, render_generate_summary, render_warnings};
use crate::ui::views::validation::render_validation;

pub fn cmd_generate(
    config: &GeneratorConfig,
    config_path: &Path,
    dry_run: bool,
    ui: &UiContext,
) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let use_case = GenerateUseCase::local(&project_root);
    let options = GenerateOptions { dry_run };

    if ui.json {
        let result = use_case.generate(config, &options)?;
        crate::ui::json::emit_tagged(
            "generate",
            if dry_run { "dry_run" } else { "complete" },
            &result,
        )?;
        return Ok(());
    }

    if ui.verbose {
        print!(
            "{}",
            render_generate_header(config_path, &config.output, dry_run, ui.style)
        );
    }

    let result = use_case.generate(config, &options)?;

    if !ui.verbose {
        return Ok(());
    }

    if let Some(validation) = &result.validation {
        print!("{}", render_validation(validation, ui.style));
    }

    if dry_run && !result.skipped {
        let display = config.output.display().to_string();
        print!(
            "{}",
            render_output_diff(&display, &result.previous, &result.content, ui.style)
        );
    }

    print!("{}", render_generate_summary(&result, dry_run, ui.style));
    print!("{}", render_warnings(&result.warnings, ui.style));

    Ok(())
}
