use crate::api::CustomizationKind;
use crate::view::{BannerStatus, ErrorBanner, FormView, ListView};
use crate::workflow::SelectedCount;
use colored::*;

pub fn format_banner(banner: &ErrorBanner) -> String {
    let title = match banner.status {
        BannerStatus::Warning => format!("[!] {}", banner.title).yellow().bold(),
        BannerStatus::Critical => format!("[X] {}", banner.title).red().bold(),
    };

    let mut out = title.to_string();
    for error in &banner.errors {
        out.push_str(&format!("\n  - {}", error));
    }
    out
}

pub fn print_banner(banner: &ErrorBanner) {
    eprintln!("{}", format_banner(banner));
}

pub fn format_form(view: &FormView) -> String {
    let mut out = format!("{}\n{}\n", view.title.bold(), view.subtitle.dimmed());

    for field in &view.fields {
        out.push_str(&format!("  {}: {}", field.label.cyan(), field.value));
        if let Some(error) = &field.error {
            out.push_str(&format!("  {}", error.red()));
        }
        out.push('\n');
    }

    out
}

pub fn print_form(view: &FormView) {
    if let Some(banner) = &view.banner {
        print_banner(banner);
    }
    print!("{}", format_form(view));
}

/// 목록 테이블. `kind`가 있으면 해당 종류만 표시
pub fn format_list(view: &ListView, kind: Option<CustomizationKind>) -> String {
    let rows: Vec<_> = view
        .rows
        .iter()
        .filter(|r| kind.map_or(true, |k| r.kind == k.as_str()))
        .collect();

    if rows.is_empty() {
        return format!(
            "{}\n{}\n",
            "No customizations yet".bold(),
            "Create one with `new-payment`, `hide-delivery` or `rename-delivery`.".dimmed()
        );
    }

    let mut out = format!(
        "{:<42} {:<10} {:<36} {}\n",
        "ID".bold(),
        "Kind".bold(),
        "Title".bold(),
        "Rule".bold()
    );

    for row in rows {
        let marker = if row.selected { "*" } else { " " };
        out.push_str(&format!(
            "{}{:<41} {:<10} {:<36} {}\n",
            marker,
            row.id,
            row.kind,
            row.title,
            row.summary.dimmed()
        ));
    }

    if let SelectedCount::Some(n) = view.selected_count {
        if n > 0 {
            out.push_str(&format!("{} selected\n", n));
        }
    } else {
        out.push_str("All selected\n");
    }

    out
}

pub fn print_list(view: &ListView, kind: Option<CustomizationKind>) {
    print!("{}", format_list(view, kind));
}
