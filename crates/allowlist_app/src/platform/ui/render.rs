use allowlist_core::{AdminViewModel, InheritanceStatus, SiteRowView, UrlCellView};

pub fn render(view: &AdminViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Org default URLs ({})", view.org_urls.len()));
    push_cells(&mut lines, &view.org_urls);

    lines.push(String::new());
    lines.push(format!("Sites ({})", view.sites.len()));
    for site in &view.sites {
        lines.push(format_site_row(site));
        push_cells(&mut lines, &site.urls);
    }

    lines
}

/// Text shown before reading the next line.
pub fn prompt(view: &AdminViewModel) -> String {
    match &view.pending_revert {
        Some(pending) => format!(
            "Revert \"{}\" to the {} org default URL(s)? Its current list will be replaced. [y/N] ",
            pending.site_name, pending.org_url_count
        ),
        None if view.edit_cursor.is_some() => "edit> ".to_string(),
        None => "> ".to_string(),
    }
}

fn push_cells(lines: &mut Vec<String>, cells: &[UrlCellView]) {
    if cells.is_empty() {
        lines.push("    (no URLs)".to_string());
        return;
    }
    lines.extend(cells.iter().map(format_cell));
}

fn format_site_row(site: &SiteRowView) -> String {
    let status = match (site.status, site.explicit_status) {
        (InheritanceStatus::Inherited, false) => "inherited",
        (InheritanceStatus::Inherited, true) => "inherited (set)",
        (InheritanceStatus::Custom, false) => "custom",
        (InheritanceStatus::Custom, true) => "custom (set)",
    };
    let servers = if site.server_count == 1 {
        "1 server".to_string()
    } else {
        format!("{} servers", site.server_count)
    };
    format!(
        "  #{} {} <{}> {} | {} | {} | {}",
        site.site_id, site.name, site.url, site.product, servers, site.activity, status
    )
}

fn format_cell(cell: &UrlCellView) -> String {
    let marker = if cell.editing { '>' } else { ' ' };
    let value = if cell.value.is_empty() {
        "(empty)"
    } else {
        cell.value.as_str()
    };
    let mut notes = Vec::new();
    if !cell.value.is_empty() && !cell.looks_valid {
        notes.push("not a valid http(s) URL");
    }
    if cell.duplicate {
        notes.push("duplicate");
    }
    if notes.is_empty() {
        format!("  {marker} [{}] {value}", cell.index)
    } else {
        format!("  {marker} [{}] {value}  ! {}", cell.index, notes.join(", "))
    }
}
