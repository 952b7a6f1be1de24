//! Renderers for every report type.

use super::markdown::Markdown;
use super::{format_cv, format_stat, thousands};
use crate::error::AnalysisError;
use crate::types::{
    ColumnContext, DatasetInfo, FrequencyEntry, FrequencyReport, KurtosisClass, MeanReport,
    SkewDirection, SkewnessReport, StatReport, StdDevReport,
};

/// Render any per-column report.
pub fn render(report: &StatReport) -> String {
    match report {
        StatReport::Mean(r) => render_mean(r),
        StatReport::StdDev(r) => render_std(r),
        StatReport::Skewness(r) => render_skewness(r),
        StatReport::Frequency(r) => render_frequency(r),
    }
}

/// Error line returned in place of a report.
pub fn render_error(error: &AnalysisError) -> String {
    format!("❌ **Error**: {error}")
}

fn dataset_information(md: &mut Markdown, ctx: &ColumnContext) {
    md.section("Dataset Information")
        .field("Dataset", &ctx.source_name)
        .field("Column", &ctx.column)
        .field("Total Rows", thousands(ctx.total_rows))
        .field("Valid Rows", thousands(ctx.valid_rows))
        .field("Missing Values", thousands(ctx.missing_count))
        .field("Data Type", &ctx.dtype);
}

pub fn render_mean(report: &MeanReport) -> String {
    let mut md = Markdown::new(&format!("Mean Analysis: {}", report.context.column));
    dataset_information(&mut md, &report.context);

    md.section("Mean Calculation")
        .field("Mean Value", format_stat(report.mean));

    md.section("Additional Statistics")
        .field("Minimum", format_stat(report.min))
        .field("Maximum", format_stat(report.max))
        .field("Range", format_stat(report.range))
        .field("Median", format_stat(report.median));

    md.section("Insights");
    for insight in &report.insights {
        md.item(insight);
    }
    md.field("25th Percentile", format_stat(report.quartiles.p25))
        .field("50th Percentile (Median)", format_stat(report.quartiles.p50))
        .field("75th Percentile", format_stat(report.quartiles.p75));

    md.finish()
}

pub fn render_std(report: &StdDevReport) -> String {
    let mut md = Markdown::new(&format!(
        "Standard Deviation Analysis: {}",
        report.context.column
    ));
    dataset_information(&mut md, &report.context);

    md.section("Standard Deviation Calculation")
        .field("Standard Deviation", format_stat(report.std))
        .field("Mean", format_stat(report.mean))
        .field("Coefficient of Variation", format_cv(report.cv));

    md.section("Additional Statistics")
        .field("Variance", format_stat(report.variance))
        .field("Minimum", format_stat(report.min))
        .field("Maximum", format_stat(report.max))
        .field("Range", format_stat(report.range));

    md.section("Insights");
    for insight in &report.insights {
        md.item(insight);
    }
    md.field("25th Percentile", format_stat(report.quartiles.p25))
        .field("50th Percentile (Median)", format_stat(report.quartiles.p50))
        .field("75th Percentile", format_stat(report.quartiles.p75))
        .field("Interquartile Range (IQR)", format_stat(report.iqr));

    md.finish()
}

pub fn render_skewness(report: &SkewnessReport) -> String {
    let mut md = Markdown::new(&format!(
        "Distribution Skewness Analysis: {}",
        report.context.column
    ));
    dataset_information(&mut md, &report.context);

    let mode = report
        .mode
        .map_or_else(|| "No unique mode".to_string(), format_stat);
    md.section("Distribution Shape Analysis")
        .field("Skewness", format_stat(report.skewness))
        .field("Kurtosis", format_stat(report.kurtosis))
        .field("Mean", format_stat(report.mean))
        .field("Median", format_stat(report.median))
        .field("Mode", mode);

    let skew_line = match report.skew_class {
        SkewDirection::Symmetric => "Approximately symmetric (|skewness| < 0.5)",
        SkewDirection::RightSkewed => "Right-skewed (positive skewness > 0.5)",
        SkewDirection::LeftSkewed => "Left-skewed (negative skewness < -0.5)",
    };
    let kurtosis_line = match report.kurtosis_class {
        KurtosisClass::Mesokurtic => "Mesokurtic (normal-like peaks, |kurtosis| < 2)",
        KurtosisClass::Leptokurtic => "Leptokurtic (sharp peaks, kurtosis > 2)",
        KurtosisClass::Platykurtic => "Platykurtic (flat peaks, kurtosis < -2)",
    };
    md.section("Distribution Classification")
        .field("Skewness", skew_line)
        .field("Kurtosis", kurtosis_line);

    let central = match report.central_tendency {
        SkewDirection::Symmetric => "Very close, suggesting symmetric distribution",
        SkewDirection::RightSkewed => "Mean > Median, indicating right skew",
        SkewDirection::LeftSkewed => "Mean < Median, indicating left skew",
    };
    md.section("Central Tendency Comparison")
        .field("Mean vs Median", central);

    let interpretation = match report.quartile_class {
        SkewDirection::Symmetric => "Symmetric distribution around median",
        SkewDirection::RightSkewed => "Right-skewed distribution",
        SkewDirection::LeftSkewed => "Left-skewed distribution",
    };
    md.section("Percentile Analysis")
        .field("10th Percentile", format_stat(report.p10))
        .field("25th Percentile", format_stat(report.quartiles.p25))
        .field("50th Percentile (Median)", format_stat(report.quartiles.p50))
        .field("75th Percentile", format_stat(report.quartiles.p75))
        .field("90th Percentile", format_stat(report.p90))
        .field("Quartile Skewness", format_stat(report.quartile_skewness))
        .sub_field("Interpretation", interpretation);

    md.section("Insights");
    for insight in &report.insights {
        md.item(insight);
    }

    md.finish()
}

fn entry_label(entry: &FrequencyEntry) -> String {
    format!("{} ({:.2}%)", entry.value, entry.percentage)
}

pub fn render_frequency(report: &FrequencyReport) -> String {
    let ctx = &report.context;
    let mut md = Markdown::new(&format!("Column Analysis: {}", ctx.column));

    md.section("Dataset Information")
        .field("Dataset", &ctx.source_name)
        .field("Column", &ctx.column)
        .field("Total Rows", thousands(ctx.total_rows))
        .field("Unique Values", thousands(report.distinct_count()))
        .field("Data Type", &ctx.dtype);

    let rows: Vec<Vec<String>> = report
        .entries
        .iter()
        .map(|e| {
            vec![
                e.value.clone(),
                thousands(e.count),
                format!("{:.2}%", e.percentage),
                format!("{:.2}%", e.cumulative_percentage),
            ]
        })
        .collect();
    md.section("Unique Values Analysis").table(
        &["Value", "Count", "Percentage", "Cumulative %"],
        &rows,
    );

    md.section("Summary Statistics");
    if let Some(most) = report.most_common() {
        md.field("Most Common Value", entry_label(most));
    }
    if let Some(least) = report.least_common() {
        md.field("Least Common Value", entry_label(least));
    }
    if ctx.missing_count > 0 {
        md.field(
            "Missing Values",
            format!(
                "{} ({:.2}%)",
                thousands(ctx.missing_count),
                ctx.missing_percentage()
            ),
        );
    } else {
        md.field("Missing Values", "None");
    }
    md.field(
        "Distribution",
        format!(
            "{} unique values ({})",
            report.distinct_count(),
            report.variety.as_str()
        ),
    );

    if let Some(top) = &report.top_entries {
        let rows: Vec<Vec<String>> = top
            .iter()
            .enumerate()
            .map(|(i, e)| {
                vec![
                    (i + 1).to_string(),
                    e.value.clone(),
                    thousands(e.count),
                    format!("{:.2}%", e.percentage),
                ]
            })
            .collect();
        md.section(&format!("Top {} Most Common Values", top.len()))
            .table(&["Rank", "Value", "Count", "Percentage"], &rows);
    }

    md.finish()
}

/// Render the dataset overview: shape, schema, missing values, numeric
/// statistics and a sample of the first rows.
pub fn render_dataset_summary(info: &DatasetInfo) -> String {
    let mut md = Markdown::new(&format!("Dataset Summary: {}", info.source_name));

    md.section("Basic Information")
        .field("Total Rows", thousands(info.total_rows))
        .field("Total Columns", info.total_columns);

    let dtypes: Vec<Vec<String>> = info
        .columns
        .iter()
        .map(|c| vec![c.name.clone(), c.dtype.clone()])
        .collect();
    md.section("Data Types")
        .table(&["Column", "Data Type"], &dtypes);

    let missing: Vec<Vec<String>> = info
        .columns
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                thousands(c.missing_count),
                format!("{:.2}%", info.missing_percentage(c)),
            ]
        })
        .collect();
    md.section("Missing Values")
        .table(&["Column", "Missing Count", "Missing %"], &missing);

    if !info.numeric_summary.is_empty() {
        let stats: Vec<Vec<String>> = info
            .numeric_summary
            .iter()
            .map(|s| {
                vec![
                    s.column.clone(),
                    thousands(s.count),
                    format_stat(s.mean),
                    format_stat(s.std),
                    format_stat(s.min),
                    format_stat(s.p25),
                    format_stat(s.p50),
                    format_stat(s.p75),
                    format_stat(s.max),
                ]
            })
            .collect();
        md.section("Numeric Column Statistics").table(
            &["Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"],
            &stats,
        );
    }

    md.section(&format!("Sample Data (First {} rows)", info.sample_rows))
        .code_block(&info.sample_preview);

    md.finish()
}
