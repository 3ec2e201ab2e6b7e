use crate::panels::{ButtonGroup, InputPanel, Panels};
use crate::view::{AdminView, TableView};

pub fn render_index(view: &AdminView) -> String {
    let (alert, tone) = match &view.status {
        Some(status) => (escape_html(&status.text), status.tone.color()),
        None => (String::new(), "inherit"),
    };
    let refreshed = view
        .table
        .refreshed_at
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    INDEX_HTML
        .replace("{{GROUPS}}", &render_groups(&view.panels))
        .replace("{{INPUTS}}", &render_inputs(&view.panels))
        .replace("{{ALERT}}", &alert)
        .replace("{{ALERT_COLOR}}", tone)
        .replace("{{COUNT}}", &view.entry_count.to_string())
        .replace("{{REFRESHED}}", &refreshed)
        .replace("{{HEADER}}", &render_header())
        .replace("{{ROWS}}", &render_rows(&view.table))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            // keeps user text from ever matching a template placeholder
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_header() -> String {
    let cells: String = TableView::HEADERS
        .iter()
        .map(|name| format!("<th>{name}</th>"))
        .collect();
    format!("<tr>{cells}</tr>")
}

/// One `<tr>` per entry, five cells each, in server order.
pub fn render_rows(table: &TableView) -> String {
    table
        .rows
        .iter()
        .map(|row| {
            let cells: String = row
                .cells()
                .iter()
                .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                .collect();
            format!("<tr>{cells}</tr>\n")
        })
        .collect()
}

fn toggle_button(action: &str, label: &str) -> String {
    format!(
        r#"<form method="post" action="{action}"><button type="submit" class="toggle">{label}</button></form>"#
    )
}

fn render_groups(panels: &Panels) -> String {
    let mut toggles = String::new();
    let mut groups = String::new();
    for group in ButtonGroup::ALL {
        toggles.push_str(&toggle_button(&format!("/panels/group/{}", group.name()), group.label()));

        let buttons: String = group
            .panels()
            .iter()
            .map(|panel| toggle_button(&format!("/panels/input/{}", panel.id()), panel.label()))
            .collect();
        groups.push_str(&format!(
            r#"<div id="{}" class="group" style="opacity: {}">{buttons}</div>"#,
            group.name(),
            panels.group_opacity(group),
        ));
    }
    format!(r#"<div class="toggles">{toggles}</div><div id="btnCont">{groups}</div>"#)
}

fn text_input(name: &str, label: &str, element_id: Option<&str>, disabled: &str) -> String {
    let id_attr = element_id
        .map(|id| format!(r#" id="{id}""#))
        .unwrap_or_default();
    format!(
        r#"<label>{label}<input type="text" name="{name}"{id_attr} required{disabled} /></label>"#
    )
}

fn activity_inputs(disabled: &str) -> String {
    [
        ("title", "Title"),
        ("consumption_in_wh", "Consumption (Wh)"),
        ("image_path", "Image path"),
        ("source", "Source"),
    ]
    .iter()
    .map(|(name, label)| text_input(name, label, None, disabled))
    .collect()
}

fn panel_form(panel: InputPanel, disabled: &str) -> String {
    let submit = format!(r#"<button type="submit"{disabled}>{}</button>"#, panel.label());
    match panel {
        InputPanel::AddOne => format!(
            r#"<form method="post" action="/activities/add">{}{submit}</form>"#,
            activity_inputs(disabled)
        ),
        InputPanel::AddOneJson => format!(
            r#"<form method="post" action="/activities/add-json"><textarea name="json" rows="8" required{disabled}></textarea>{submit}</form>"#
        ),
        InputPanel::AddJsonFile => format!(
            r#"<form method="post" action="/activities/import" enctype="multipart/form-data"><input type="file" name="file" accept=".json,application/json" required{disabled} />{submit}</form>"#
        ),
        InputPanel::EditOne => format!(
            r#"<form method="post" action="/activities/edit">{}{}{submit}</form>"#,
            text_input("id", "Id", Some("editId"), disabled),
            activity_inputs(disabled)
        ),
        InputPanel::RemoveOne => format!(
            r#"<form method="post" action="/activities/remove">{}{submit}</form>"#,
            text_input("id", "Id", Some("removeId"), disabled)
        ),
    }
}

fn render_inputs(panels: &Panels) -> String {
    let inner: String = InputPanel::ALL
        .into_iter()
        .map(|panel| {
            let disabled = if panels.inputs_enabled(panel) { "" } else { " disabled" };
            format!(
                r#"<div id="{}" class="panel" style="opacity: {}">{}</div>"#,
                panel.id(),
                panels.input_opacity(panel),
                panel_form(panel, disabled)
            )
        })
        .collect();
    format!(r#"<div id="inputCont">{inner}</div>"#)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Activity Admin</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #2b2a28;
      --accent: #2f4858;
      --card: #ffffff;
      --line: rgba(47, 72, 88, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    main {
      width: min(1100px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-family: "Georgia", serif;
    }

    .toolbar,
    .toggles,
    .group {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    #btnCont,
    #inputCont {
      display: grid;
    }

    #btnCont > div,
    #inputCont > div {
      grid-area: 1 / 1;
      transition: opacity 200ms ease;
    }

    .panel form {
      display: grid;
      gap: 10px;
      background: var(--card);
      border-radius: 16px;
      padding: 18px;
      border: 1px solid var(--line);
    }

    .panel label {
      display: grid;
      gap: 4px;
      font-size: 0.9rem;
    }

    input,
    textarea {
      font: inherit;
      padding: 8px 10px;
      border-radius: 8px;
      border: 1px solid var(--line);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.danger {
      background: #c63b2b;
    }

    #alertMsg {
      min-height: 1.2em;
      font-weight: 600;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: var(--card);
    }

    th,
    td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid var(--line);
      word-break: break-all;
    }

    .meta {
      color: #6f6a65;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Activity Admin</h1>
      <p class="meta">Entries: <span id="entryCounter">{{COUNT}}</span> &middot; last refreshed {{REFRESHED}}</p>
    </header>

    <section class="toolbar">
      {{GROUPS}}
      <form method="post" action="/activities/refresh"><button id="refreshDB" type="submit">Refresh</button></form>
      <form method="post" action="/activities/reset"><button id="resetDB" class="danger" type="submit">Reset database</button></form>
    </section>

    <section>
      {{INPUTS}}
    </section>

    <p id="alertMsg" style="color: {{ALERT_COLOR}}">{{ALERT}}</p>

    <table>
      {{HEADER}}
      {{ROWS}}
    </table>
  </main>
</body>
</html>
"#;
