//! Server-rendered HTML for the account forms and the study page

use axum::response::Html;
use indoc::{formatdoc, indoc};

const STYLE: &str = indoc! {"
    body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
    form.auth { display: flex; flex-direction: column; gap: .5rem; max-width: 22rem; }
    input, textarea, button { font: inherit; padding: .4rem; }
    textarea { width: 100%; min-height: 10rem; }
    .error { color: #a00; }
    .notice { color: #060; }
    .card { border: 1px solid #ccc; border-radius: 6px; padding: .75rem; margin: .75rem 0; }
    .card .answer { display: none; color: #444; }
    .card.revealed .answer { display: block; }
    .card .tools { float: right; display: flex; gap: .25rem; }
    .card.editing [contenteditable=true] { outline: 1px solid #36c; }
    header { display: flex; justify-content: space-between; align-items: center; }
    #quiz { border: 2px solid #36c; border-radius: 8px; padding: 1rem; margin: 1rem 0; user-select: none; }
    #quiz-track { background: #eee; height: .5rem; border-radius: 4px; }
    #quiz-bar { background: #36c; height: 100%; width: 0; border-radius: 4px; }
"};

const STUDY_SCRIPT: &str = include_str!("../assets/study.js");

/// Escape text for use in HTML content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(formatdoc! {r#"
        <!doctype html>
        <html lang="en">
        <head>
        <meta charset="utf-8">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <title>{title} · QuizCraft</title>
        <style>
        {STYLE}</style>
        </head>
        <body>
        {body}
        </body>
        </html>
    "#})
}

fn message(class: &str, text: Option<&str>) -> String {
    text.map(|text| format!(r#"<p class="{class}">{}</p>"#, escape(text)))
        .unwrap_or_default()
}

/// Login form, keeping the submitted identifier but never the password
pub fn login(error: Option<&str>, notice: Option<&str>, identifier: &str) -> Html<String> {
    let error = message("error", error);
    let notice = message("notice", notice);
    let identifier = escape(identifier);

    layout(
        "Log in",
        &formatdoc! {r#"
            <h1>Log in</h1>
            {notice}{error}
            <form class="auth" method="post" action="/login">
              <label>Username or email <input name="identifier" value="{identifier}" autocomplete="username" required></label>
              <label>Password <input name="password" type="password" autocomplete="current-password" required></label>
              <button type="submit">Log in</button>
            </form>
            <p>No account yet? <a href="/signup">Sign up</a></p>
        "#},
    )
}

/// Signup form, keeping the submitted username and email
pub fn signup(error: Option<&str>, username: &str, email: &str) -> Html<String> {
    let error = message("error", error);
    let username = escape(username);
    let email = escape(email);

    layout(
        "Sign up",
        &formatdoc! {r#"
            <h1>Create an account</h1>
            {error}
            <form class="auth" method="post" action="/signup">
              <label>Username <input name="username" value="{username}" autocomplete="username" required></label>
              <label>Email <input name="email" type="email" value="{email}" autocomplete="email" required></label>
              <label>Password <input name="password" type="password" autocomplete="new-password" required></label>
              <label>Confirm password <input name="confirm_password" type="password" autocomplete="new-password" required></label>
              <button type="submit">Sign up</button>
            </form>
            <p>Already registered? <a href="/login">Log in</a></p>
        "#},
    )
}

/// Study page for a signed-in user
pub fn index(username: &str, transcription_enabled: bool) -> Html<String> {
    let username = escape(username);
    let transcription = if transcription_enabled {
        indoc! {r#"
            <p>
              <input id="audio" type="file" accept="audio/*">
              <button id="transcribe" type="button">Transcribe audio into notes</button>
            </p>
        "#}
    } else {
        ""
    };

    layout(
        "Study",
        &formatdoc! {r#"
            <header>
              <h1>QuizCraft</h1>
              <span>Signed in as <strong id="username">{username}</strong> · <a href="/logout">Log out</a></span>
            </header>
            <p id="login-required" class="error" hidden>Your session has ended. <a href="/login">Log in</a> to keep generating flashcards.</p>
            <textarea id="notes" placeholder="Paste your study notes here"></textarea>
            {transcription}
            <p><button id="generate" type="button">Generate flashcards</button> <span id="status"></span></p>
            <p>
              <label>Quiz questions
                <select id="quiz-count">
                  <option value="all">All</option>
                  <option value="5">5</option>
                  <option value="10">10</option>
                  <option value="15">15</option>
                  <option value="custom">Custom</option>
                </select>
              </label>
              <input id="quiz-custom" type="number" min="1" hidden>
              <button id="quiz-start" type="button">Start quiz</button>
            </p>
            <section id="quiz" hidden>
              <div id="quiz-run">
                <p id="quiz-progress"></p>
                <div id="quiz-track"><div id="quiz-bar"></div></div>
                <p id="quiz-question"></p>
                <input id="quiz-answer" placeholder="Your answer" autocomplete="off">
                <button id="quiz-submit" type="button">Submit</button>
              </div>
              <p id="quiz-feedback"></p>
              <div id="quiz-report" hidden>
                <h2>Quiz completed</h2>
                <p id="quiz-score"></p>
                <p id="quiz-advice"></p>
                <button id="quiz-download" type="button">Download report</button>
              </div>
              <button id="quiz-close" type="button">Close</button>
            </section>
            <p id="card-actions" hidden><button id="export-csv" type="button">Export CSV</button></p>
            <div id="cards"></div>
            <script>
            {STUDY_SCRIPT}</script>
        "#},
    )
}
