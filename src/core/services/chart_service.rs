//! Expense breakdown and pie-chart geometry.

use std::f64::consts::TAU;

use crate::core::services::summary_service::{MonthlySummary, SummaryService};
use crate::domain::{CategoryRegistry, MonthCursor, Transaction};

pub const PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#66FF66", "#FF6666",
];

pub const CHART_PLACEHOLDER: &str = "Not enough data for the chart";

/// Gap between the pie edge and the drawing surface edge.
const PIE_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Absolute expense per category, keyed in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseBreakdown {
    totals: Vec<CategoryTotal>,
}

impl ExpenseBreakdown {
    pub fn from_transactions(
        transactions: &[Transaction],
        cursor: MonthCursor,
        registry: &CategoryRegistry,
    ) -> Self {
        Self::from_summary(&SummaryService::summarize(transactions, cursor, registry))
    }

    pub fn from_summary(summary: &MonthlySummary) -> Self {
        let mut breakdown = Self::default();
        for entry in summary.expenses() {
            breakdown.accumulate(&entry.category, entry.amount.abs());
        }
        breakdown
    }

    fn accumulate(&mut self, category: &str, amount: f64) {
        match self
            .totals
            .iter_mut()
            .find(|total| total.category == category)
        {
            Some(total) => total.amount += amount,
            None => self.totals.push(CategoryTotal {
                category: category.to_string(),
                amount,
            }),
        }
    }

    pub fn totals(&self) -> &[CategoryTotal] {
        &self.totals
    }

    pub fn total(&self) -> f64 {
        self.totals.iter().map(|total| total.amount).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub(crate) fn on_circle(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }
}

/// One pie slice. Angles are radians, clockwise from the positive x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub category: String,
    pub amount: f64,
    pub start_angle: f64,
    pub sweep: f64,
    pub color: &'static str,
    pub percent: f64,
    pub label: String,
    pub label_at: Point,
}

impl Wedge {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartLayout {
    /// Nothing to draw; show the message centred instead.
    Empty { message: &'static str },
    Pie {
        center: Point,
        radius: f64,
        wedges: Vec<Wedge>,
    },
}

impl ChartLayout {
    /// Lays out a square chart of `size` units.
    pub fn compute(breakdown: &ExpenseBreakdown, size: f64) -> Self {
        let total = breakdown.total();
        if total == 0.0 {
            return ChartLayout::Empty {
                message: CHART_PLACEHOLDER,
            };
        }

        let center = Point {
            x: size / 2.0,
            y: size / 2.0,
        };
        let radius = (size / 2.0 - PIE_MARGIN).max(0.0);
        let label_radius = size / 4.0;

        let mut start_angle = 0.0;
        let mut wedges = Vec::with_capacity(breakdown.totals().len());
        for (index, total_for) in breakdown.totals().iter().enumerate() {
            let sweep = TAU * total_for.amount / total;
            let percent = total_for.amount / total * 100.0;
            let mid = start_angle + sweep / 2.0;
            wedges.push(Wedge {
                category: total_for.category.clone(),
                amount: total_for.amount,
                start_angle,
                sweep,
                color: PALETTE[index % PALETTE.len()],
                percent,
                label: format!("{} ({:.1}%)", total_for.category, percent),
                label_at: Point::on_circle(center, label_radius, mid),
            });
            start_angle += sweep;
        }

        ChartLayout::Pie {
            center,
            radius,
            wedges,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ChartLayout::Empty { .. })
    }

    pub fn wedges(&self) -> &[Wedge] {
        match self {
            ChartLayout::Empty { .. } => &[],
            ChartLayout::Pie { wedges, .. } => wedges,
        }
    }
}

pub struct ChartService;

impl ChartService {
    pub fn layout(
        transactions: &[Transaction],
        cursor: MonthCursor,
        registry: &CategoryRegistry,
        size: f64,
    ) -> ChartLayout {
        let breakdown = ExpenseBreakdown::from_transactions(transactions, cursor, registry);
        ChartLayout::compute(&breakdown, size)
    }
}
