use crate::models::TodayResponse;

/// Font used by the badge. Handed to the renderer by whoever owns the display.
#[derive(Debug, Clone)]
pub struct DisplayFont {
    pub family: String,
    pub fallback: String,
}

impl Default for DisplayFont {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            fallback: "sans-serif".to_string(),
        }
    }
}

impl DisplayFont {
    fn css_stack(&self) -> String {
        format!("\"{}\", {}", self.family.replace('"', ""), self.fallback)
    }
}

pub fn render_index(today: &TodayResponse, font: &DisplayFont) -> String {
    INDEX_HTML
        .replace("{{FONT}}", &font.css_stack())
        .replace("{{DATE}}", &today.date)
        .replace("{{COUNT}}", &today.count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Pouches Today</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      background: transparent;
      font-family: {{FONT}};
    }

    .badge {
      width: 400px;
      height: 400px;
      border-radius: 50%;
      background: #f2f2f2;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      gap: 12px;
      color: #2b2a28;
    }

    .label {
      font-size: 14pt;
    }

    .count {
      font-size: 48pt;
      font-weight: bold;
    }

    .buttons {
      display: flex;
      gap: 16px;
    }

    .buttons form {
      margin: 0;
    }

    button {
      width: 50px;
      height: 50px;
      border: none;
      border-radius: 25px;
      background: #ddd;
      font-family: inherit;
      font-size: 20pt;
      cursor: pointer;
    }

    .exit {
      margin-top: 20px;
    }

    .exit button {
      width: 40px;
      height: 40px;
      border-radius: 20px;
      background: #ff6b6b;
      color: white;
      font-size: 12pt;
      font-weight: bold;
    }
  </style>
</head>
<body>
  <main class="badge" data-date="{{DATE}}">
    <span class="label">Today</span>
    <span class="count" id="count">{{COUNT}}</span>
    <div class="buttons">
      <form method="post" action="/click/sub" id="sub-form">
        <button type="submit" aria-label="decrease">&ndash;</button>
      </form>
      <form method="post" action="/click/add" id="add-form">
        <button type="submit" aria-label="increase">+</button>
      </form>
    </div>
    <form method="post" action="/api/exit" id="exit-form" class="exit">
      <button type="submit" aria-label="exit">X</button>
    </form>
  </main>
  <script>
    const countEl = document.getElementById('count');

    const send = async (action) => {
      const res = await fetch('/api/click', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ action })
      });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      const today = await res.json();
      countEl.textContent = today.count;
    };

    for (const [id, action] of [['add-form', 'add'], ['sub-form', 'sub']]) {
      document.getElementById(id).addEventListener('submit', (event) => {
        event.preventDefault();
        send(action).catch((err) => console.error(err));
      });
    }

    document.getElementById('exit-form').addEventListener('submit', (event) => {
      event.preventDefault();
      fetch('/api/exit', { method: 'POST' })
        .then(() => {
          document.body.textContent = '';
          window.close();
        })
        .catch((err) => console.error(err));
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_placeholders() {
        let today = TodayResponse {
            date: "2024-05-01".to_string(),
            count: 3,
        };
        let font = DisplayFont {
            family: "Space Grotesk".to_string(),
            fallback: "sans-serif".to_string(),
        };
        let html = render_index(&today, &font);
        assert!(html.contains(r#"<span class="count" id="count">3</span>"#));
        assert!(html.contains(r#"data-date="2024-05-01""#));
        assert!(html.contains(r#"font-family: "Space Grotesk", sans-serif;"#));
        assert!(html.contains(r#"action="/api/exit""#));
        assert!(!html.contains("{{"));
    }
}
