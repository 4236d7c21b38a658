use crate::gateway::Provider;

pub fn render_index(default_provider: Provider) -> String {
    INDEX_HTML.replace("{{PROVIDER}}", default_provider.as_str())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fitness AI Tracker</title>
  <style>
    :root {
      --bg: #f7fafc;
      --ink: #222;
      --muted: #6b7280;
      --accent: #0070f3;
      --line: #e5e7eb;
      --card: #fff;
      --shadow: 0 4px 24px rgba(0, 0, 0, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      padding: 48px 18px;
      gap: 32px;
    }

    h1 {
      margin: 0;
      font-size: 2.2rem;
      letter-spacing: 1px;
    }

    h2 {
      margin: 0 0 20px;
      font-size: 1.35rem;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 32px;
      width: min(600px, 100%);
    }

    .provider {
      display: flex;
      align-items: center;
      gap: 16px;
      font-weight: 600;
    }

    label {
      display: block;
      margin-bottom: 10px;
      font-weight: 600;
    }

    .field {
      margin-bottom: 22px;
    }

    input,
    select {
      width: 100%;
      padding: 12px 10px;
      border-radius: 6px;
      border: 1.5px solid #bbb;
      font-size: 1rem;
      background: #fff;
      color: var(--ink);
    }

    .provider select {
      width: auto;
    }

    button {
      background: var(--accent);
      color: #fff;
      border: none;
      padding: 13px 24px;
      border-radius: 8px;
      cursor: pointer;
      font-weight: 600;
      font-size: 1rem;
    }

    button:disabled {
      opacity: 0.6;
      cursor: default;
    }

    #log-form button {
      width: 100%;
    }

    .ask-row {
      display: flex;
      gap: 14px;
    }

    pre,
    .answer {
      margin: 22px 0 0;
      background: var(--bg);
      border-radius: 8px;
      padding: 14px;
      overflow-x: auto;
      white-space: pre-wrap;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      table-layout: fixed;
    }

    th,
    td {
      padding: 12px 10px;
      text-align: left;
      border: 1.5px solid var(--line);
      word-break: break-word;
    }

    tbody tr:nth-child(even) {
      background: var(--bg);
    }

    .error {
      color: #d00;
    }

    [hidden] {
      display: none !important;
    }
  </style>
</head>
<body>
  <div class="provider">
    <label for="ai-provider">AI Provider:</label>
    <select id="ai-provider" data-default="{{PROVIDER}}">
      <option value="ollama">Ollama (local)</option>
      <option value="huggingface">Hugging Face (cloud)</option>
    </select>
  </div>

  <h1>Fitness AI Tracker</h1>

  <form id="log-form" class="card">
    <div class="field">
      <label for="owner">Username</label>
      <input id="owner" type="text" required placeholder="e.g. alice123" />
    </div>
    <div class="field">
      <label for="activity">Workout Name</label>
      <input id="activity" type="text" required placeholder="e.g. Running" />
    </div>
    <div class="field">
      <label for="duration">Duration (minutes)</label>
      <input id="duration" type="number" min="1" required placeholder="e.g. 30" />
    </div>
    <button id="log-btn" type="submit">Log Workout</button>
    <p id="log-error" class="error" hidden></p>
    <pre id="log-result" hidden></pre>
  </form>

  <section id="history-card" class="card" hidden>
    <h2>Workout History for <span id="history-owner"></span></h2>
    <table>
      <thead>
        <tr><th>Workout</th><th>Duration</th><th>Calories</th><th>Time</th></tr>
      </thead>
      <tbody id="history-rows"></tbody>
    </table>
  </section>

  <section class="card">
    <h2>Ask Fitness AI</h2>
    <form id="ask-form" class="ask-row">
      <input id="prompt" type="text" placeholder="Ask anything about fitness, workouts, nutrition..." />
      <button id="ask-btn" type="submit" disabled>Ask AI</button>
    </form>
    <div id="answer" class="answer" hidden></div>
  </section>

  <script>
    const providerEl = document.getElementById('ai-provider');
    const ownerEl = document.getElementById('owner');
    const activityEl = document.getElementById('activity');
    const durationEl = document.getElementById('duration');
    const logForm = document.getElementById('log-form');
    const logBtn = document.getElementById('log-btn');
    const logError = document.getElementById('log-error');
    const logResult = document.getElementById('log-result');
    const historyCard = document.getElementById('history-card');
    const historyOwner = document.getElementById('history-owner');
    const historyRows = document.getElementById('history-rows');
    const askForm = document.getElementById('ask-form');
    const promptEl = document.getElementById('prompt');
    const askBtn = document.getElementById('ask-btn');
    const answerEl = document.getElementById('answer');

    providerEl.value = localStorage.getItem('ai-provider') || providerEl.dataset.default;
    providerEl.addEventListener('change', () => {
      localStorage.setItem('ai-provider', providerEl.value);
    });

    const headers = () => ({
      'content-type': 'application/json',
      'x-ai-provider': providerEl.value
    });

    const show = (el, text) => {
      el.textContent = text;
      el.hidden = !text;
    };

    const cell = (value) => {
      const td = document.createElement('td');
      td.textContent = typeof value === 'string' || typeof value === 'number'
        ? value
        : JSON.stringify(value);
      return td;
    };

    const renderHistory = (owner, history) => {
      historyRows.replaceChildren();
      history.forEach((item) => {
        const row = document.createElement('tr');
        row.append(
          cell(item.activityName),
          cell(item.durationMinutes),
          cell(item.caloriesEstimate),
          cell(new Date(item.loggedAt).toLocaleString())
        );
        historyRows.append(row);
      });
      historyOwner.textContent = owner;
      historyCard.hidden = history.length === 0;
    };

    const loadHistory = async () => {
      const owner = ownerEl.value.trim();
      if (!owner) {
        historyCard.hidden = true;
        return;
      }
      const res = await fetch(`/api/workout-history?owner=${encodeURIComponent(owner)}`);
      if (res.ok) {
        const data = await res.json();
        renderHistory(owner, data.history || []);
      }
    };

    ownerEl.addEventListener('change', () => {
      loadHistory().catch(() => {});
    });

    logForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      logBtn.disabled = true;
      logBtn.textContent = 'Logging...';
      show(logError, '');
      show(logResult, '');
      try {
        const res = await fetch('/api/calculate-calories', {
          method: 'POST',
          headers: headers(),
          body: JSON.stringify({
            owner: ownerEl.value.trim(),
            activityName: activityEl.value,
            durationMinutes: durationEl.value
          })
        });
        const data = await res.json();
        if (!res.ok) {
          throw new Error(data.details ? `${data.error}: ${data.details}` : data.error || 'Something went wrong');
        }
        show(logResult, JSON.stringify(data, null, 2));
        await loadHistory();
      } catch (err) {
        show(logError, err.message);
      } finally {
        logBtn.disabled = false;
        logBtn.textContent = 'Log Workout';
      }
    });

    promptEl.addEventListener('input', () => {
      askBtn.disabled = !promptEl.value.trim();
    });

    askForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      askBtn.disabled = true;
      promptEl.disabled = true;
      askBtn.textContent = 'Asking...';
      show(answerEl, '');
      try {
        const res = await fetch('/api/ask-ai', {
          method: 'POST',
          headers: headers(),
          body: JSON.stringify({ prompt: promptEl.value })
        });
        const data = await res.json();
        show(answerEl, res.ok ? data.response : `Error: ${data.error}`);
      } catch (err) {
        show(answerEl, `Error: ${err.message}`);
      } finally {
        promptEl.disabled = false;
        askBtn.disabled = !promptEl.value.trim();
        askBtn.textContent = 'Ask AI';
      }
    });
  </script>
</body>
</html>
"#;
