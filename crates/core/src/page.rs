//! HTML rendering for the web form and the not-found page
//!
//! Every piece of text interpolated into markup goes through `html_escape`.

use crate::convert::ConversionSelector;

/// Script loaded by the form page; submits the form to `POST /convert`.
pub const APP_JS: &str = r#"(function () {
    "use strict";

    const form = document.getElementById("temperatureForm");
    const output = document.getElementById("result");

    function show(message, isError) {
        output.textContent = message;
        output.className = isError ? "result error" : "result success";
    }

    form.addEventListener("submit", async function (event) {
        event.preventDefault();

        const payload = {
            temperature: form.elements.temperature.value,
            conversion_type: form.elements.conversion_type.value,
        };

        try {
            const response = await fetch("/convert", {
                method: "POST",
                headers: { "Content-Type": "application/json" },
                body: JSON.stringify(payload),
            });
            const data = await response.json();
            if (data.success) {
                show(data.formatted_result, false);
            } else {
                show(data.error, true);
            }
        } catch (err) {
            show("Terjadi kesalahan jaringan", true);
        }
    });

    form.addEventListener("reset", function () {
        output.textContent = "";
        output.className = "result";
    });
})();
"#;

const STYLE: &str = "body{font-family:sans-serif;max-width:32rem;margin:3rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem;font-weight:bold}\
input,select,button{font-size:1rem;padding:.4rem;margin-top:.3rem}\
.result{margin-top:1.5rem;font-size:1.2rem}\
.success{color:#2e7d32}.error{color:#c62828}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
<html lang=\"id\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n\
<style>{STYLE}</style>\n\
</head>\n\
<body>\n\
{body}\
</body>\n\
</html>\n",
        html_escape::encode_text(title)
    )
}

/// Render the conversion form listing the given selectors.
pub fn render_index(options: &[ConversionSelector]) -> String {
    let mut select = String::new();
    for selector in options {
        let label = selector.label();
        select.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            html_escape::encode_double_quoted_attribute(label),
            html_escape::encode_text(label)
        ));
    }

    let body = format!(
        "<h1>Konversi Temperatur</h1>\n\
<form id=\"temperatureForm\">\n\
<label for=\"temperature\">Masukkan Temperatur</label>\n\
<input id=\"temperature\" name=\"temperature\" type=\"text\" inputmode=\"decimal\" autocomplete=\"off\" required>\n\
<label for=\"conversion_type\">Jenis Konversi</label>\n\
<select id=\"conversion_type\" name=\"conversion_type\">\n\
{select}</select>\n\
<div>\n\
<button type=\"submit\">Konversi</button>\n\
<button type=\"reset\">Bersihkan</button>\n\
</div>\n\
</form>\n\
<div id=\"result\" class=\"result\" aria-live=\"polite\"></div>\n\
<script src=\"/static/js/app.js\"></script>\n"
    );

    layout("Konversi Temperatur", &body)
}

/// Page shown for unknown routes when the client does not ask for JSON.
pub fn render_not_found(path: &str) -> String {
    let body = format!(
        "<h1>404 - Halaman Tidak Ditemukan</h1>\n\
<p>Halaman <code>{}</code> tidak ditemukan.</p>\n\
<p><a href=\"/\">Kembali ke beranda</a></p>\n",
        html_escape::encode_text(path)
    );
    layout("404 - Halaman Tidak Ditemukan", &body)
}
