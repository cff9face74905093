use std::fs;
use std::path::Path;

use crate::cli::commands::{usage_error, CommandDefinition, CommandGroup};
use crate::cli::{output, CommandResult, ShellContext};
use crate::core::services::ChartLayout;
use crate::render::{render_svg, text::legend_line};
use crate::utils;

const CHART_USAGE: &str = "chart [svg <path>]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "chart",
        CommandGroup::Chart,
        "Show this month's expenses by category, or export them as SVG",
        CHART_USAGE,
        cmd_chart,
    )]
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let size = context.config.chart_size();
    let layout = context.tracker.chart(size);
    match args {
        [] => {
            print_legend(context, &layout);
            Ok(())
        }
        [format, path] if format.eq_ignore_ascii_case("svg") => {
            export_svg(&layout, size, Path::new(path))
        }
        _ => Err(usage_error(CHART_USAGE)),
    }
}

fn print_legend(context: &ShellContext, layout: &ChartLayout) {
    output::section(format!("Expenses {}", context.tracker.cursor().label()));
    match layout {
        ChartLayout::Empty { message } => output::info(message),
        ChartLayout::Pie { wedges, .. } => {
            for wedge in wedges {
                output::swatch(
                    wedge.color,
                    legend_line(wedge, &context.config.currency_suffix),
                );
            }
        }
    }
}

fn export_svg(layout: &ChartLayout, size: f64, path: &Path) -> CommandResult {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        utils::ensure_dir(parent)?;
    }
    fs::write(path, render_svg(layout, size))?;
    tracing::info!(path = %path.display(), "chart exported");
    output::success(format!("Chart written to {}.", path.display()));
    Ok(())
}
