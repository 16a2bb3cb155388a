// SPDX-License-Identifier: Apache-2.0
//! Server-side HTML assembly. Every interpolated value goes through
//! [`escape_html`]; activity titles and member names are free text.

use chamada_model::{Roster, TribeId, PRESENT_FIELD};
use std::collections::BTreeMap;
use std::fmt::Write;

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encodes one path segment for use inside an href.
pub(crate) fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            other => {
                let _ = write!(out, "%{other:02X}");
            }
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

pub(crate) fn submission_form(roster: &Roster, today: &str) -> String {
    let mut body = String::new();
    body.push_str("<h1>Registo de presenças</h1>\n");
    body.push_str("<form method=\"post\" action=\"/\" id=\"registo\">\n");
    let _ = write!(
        body,
        "<p><label>Atividade <input type=\"text\" name=\"atividade\" required></label></p>\n\
         <p><label>Data de início <input type=\"date\" name=\"data_inicio\" value=\"{today}\" required></label></p>\n\
         <p><label>Data de fim <input type=\"date\" name=\"data_fim\" value=\"{today}\" required></label></p>\n",
        today = escape_html(today),
    );
    for tribe in roster.tribes() {
        let id = escape_html(tribe.id.as_str());
        let _ = write!(
            body,
            "<fieldset>\n<legend><label><input type=\"checkbox\" class=\"tribo\" value=\"{id}\"> {id}</label></legend>\n",
        );
        for member in &tribe.members {
            let name = escape_html(member);
            let _ = write!(
                body,
                "<p><label><input type=\"checkbox\" name=\"presenca_{name}\" value=\"{marker}\"> {name}</label></p>\n",
                marker = PRESENT_FIELD,
            );
        }
        body.push_str("</fieldset>\n");
    }
    body.push_str(
        "<input type=\"hidden\" name=\"tribos_selecionadas\" id=\"tribos_selecionadas\">\n\
         <p><button type=\"submit\">Registar</button></p>\n</form>\n\
         <p><a href=\"/atividades\">Ver atividades</a></p>\n\
         <script>\n\
         document.getElementById(\"registo\").addEventListener(\"submit\", function () {\n\
           var ids = [];\n\
           document.querySelectorAll(\"input.tribo:checked\").forEach(function (box) {\n\
             ids.push(box.value);\n\
           });\n\
           document.getElementById(\"tribos_selecionadas\").value = ids.join(\",\");\n\
         });\n\
         </script>\n",
    );
    page("Registo de presenças", &body)
}

pub(crate) fn activities_index(grouped: &BTreeMap<String, Vec<String>>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Atividades</h1>\n");
    if grouped.is_empty() {
        body.push_str("<p>Sem atividades registadas.</p>\n");
    }
    for (month, file_names) in grouped {
        let _ = write!(body, "<h2>{}</h2>\n<ul>\n", escape_html(month));
        for name in file_names {
            let _ = write!(
                body,
                "<li><a href=\"/atividade/{href}\">{label}</a></li>\n",
                href = encode_path_segment(name),
                label = escape_html(name),
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/\">Novo registo</a></p>\n");
    page("Atividades", &body)
}

pub(crate) fn activity_detail(
    file_name: &str,
    header: &[String],
    groups: &[(TribeId, Vec<(String, String)>)],
) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h1>{}</h1>\n", escape_html(file_name));
    let header_cells: Vec<String> = header.iter().map(|h| escape_html(h)).collect();
    let _ = write!(body, "<p>{}</p>\n", header_cells.join(" · "));
    for (tribe, entries) in groups {
        let _ = write!(body, "<h2>{}</h2>\n", escape_html(tribe.as_str()));
        if entries.is_empty() {
            body.push_str("<p>Sem registos.</p>\n");
            continue;
        }
        body.push_str("<table>\n<tr><th>Elemento</th><th>Presente</th></tr>\n");
        for (member, present) in entries {
            let _ = write!(
                body,
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(member),
                escape_html(present),
            );
        }
        body.push_str("</table>\n");
    }
    body.push_str("<p><a href=\"/atividades\">Voltar</a></p>\n");
    page(file_name, &body)
}
