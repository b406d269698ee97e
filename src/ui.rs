use crate::render::html_escape;
use crate::view::{Mode, ViewModel};

pub fn render_index(view: &ViewModel) -> String {
    let value = view.section(Mode::Value);
    let file = view.section(Mode::File);
    let tv = html_escape(&view.value_inputs.tv);
    let radio = html_escape(&view.value_inputs.radio);
    let newspaper = html_escape(&view.value_inputs.newspaper);

    fill_template(INDEX_HTML, |key| match key {
        "VALUE_BTN_CLASS" => Some(if value.active { "tab-btn active" } else { "tab-btn" }),
        "FILE_BTN_CLASS" => Some(if file.active { "tab-btn active" } else { "tab-btn" }),
        "VALUE_HIDDEN" => Some(if value.visible { "" } else { " hidden" }),
        "FILE_HIDDEN" => Some(if file.visible { "" } else { " hidden" }),
        "TV" => Some(tv.as_str()),
        "RADIO" => Some(radio.as_str()),
        "NEWSPAPER" => Some(newspaper.as_str()),
        "VALUE_RESULT" => Some(view.value_result.as_str()),
        "FILE_RESULT" => Some(view.file_result.as_str()),
        _ => None,
    })
}

/// Expands `{{KEY}}` placeholders in one pass over `template`. Substituted
/// text is never rescanned; unknown keys are left as they are.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => match lookup(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after;
                }
            },
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Прогноз продаж</title>
  <style>
    :root {
      --bg: #fdf6f9;
      --ink: #2b2a28;
      --accent: #d81b60;
      --accent-soft: rgba(216, 27, 96, 0.12);
      --card: #ffffff;
      --shadow: 0 24px 60px rgba(43, 42, 40, 0.12);
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
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .tabs {
      display: flex;
      gap: 8px;
    }

    .tab-btn {
      padding: 10px 18px;
      border-radius: 999px;
      text-decoration: none;
      color: var(--ink);
      background: var(--accent-soft);
      font-weight: 600;
    }

    .tab-btn.active {
      background: var(--accent);
      color: white;
    }

    .hidden {
      display: none;
    }

    form {
      display: grid;
      gap: 12px;
      max-width: 420px;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.95rem;
    }

    input {
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid rgba(43, 42, 40, 0.2);
      font-size: 1rem;
    }

    button,
    .download-btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      text-decoration: none;
      display: inline-block;
    }

    .result {
      margin-top: 16px;
    }

    .error {
      padding: 12px 16px;
      border-radius: 12px;
      background: #fdecea;
      color: #c63b2b;
    }

    .plots-container {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    .plot-image {
      width: 100%;
      border-radius: 12px;
    }

    .table-responsive {
      overflow-x: auto;
      margin-bottom: 16px;
    }

    .predictions-table {
      border-collapse: collapse;
      width: 100%;
    }

    .predictions-table th,
    .predictions-table td {
      padding: 8px 12px;
      border-bottom: 1px solid rgba(43, 42, 40, 0.1);
      text-align: right;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Прогноз продаж</h1>
    </header>

    <nav class="tabs">
      <a id="value-btn" class="{{VALUE_BTN_CLASS}}" href="/?tab=value">Значение</a>
      <a id="file-btn" class="{{FILE_BTN_CLASS}}" href="/?tab=file">Файл</a>
    </nav>

    <section id="value-section" class="section{{VALUE_HIDDEN}}">
      <form id="value-form" method="post" action="/predict/value">
        <label>Телевидение ($)
          <input id="tv" name="tv" inputmode="decimal" value="{{TV}}" required />
        </label>
        <label>Радио ($)
          <input id="radio" name="radio" inputmode="decimal" value="{{RADIO}}" required />
        </label>
        <label>Газета ($)
          <input id="newspaper" name="newspaper" inputmode="decimal" value="{{NEWSPAPER}}" required />
        </label>
        <button type="submit">Спрогнозировать</button>
      </form>
      <div id="value-result" class="result">{{VALUE_RESULT}}</div>
    </section>

    <section id="file-section" class="section{{FILE_HIDDEN}}">
      <form id="file-form" method="post" action="/predict/file" enctype="multipart/form-data">
        <label>CSV или Excel с колонками TV, Radio, Newspaper, Sales
          <input id="file-input" name="file" type="file" accept=".csv,.xls,.xlsx" />
        </label>
        <button type="submit">Загрузить и спрогнозировать</button>
      </form>
      <div id="file-result" class="result">{{FILE_RESULT}}</div>
    </section>
  </main>
</body>
</html>
"#;
