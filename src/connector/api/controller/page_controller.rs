use axum::response::Html;

/// Single-file chat client served at the root. Talks to `POST /api/ask`
/// and renders whatever `answer` comes back, fallback included.
const CHAT_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Daniel AI Assistant</title>
<style>
  body { font-family: system-ui, sans-serif; background: rgb(244, 246, 248); margin: 0; }
  main { max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
  h1 { font-size: 1.4rem; color: rgb(30, 41, 59); }
  .chat { background: white; border: 1px solid rgb(226, 232, 240); border-radius: 8px; padding: 1rem; min-height: 320px; overflow-y: auto; }
  .msg { margin: 0.5rem 0; padding: 0.6rem 0.8rem; border-radius: 8px; white-space: pre-wrap; }
  .user { background: rgb(219, 234, 254); text-align: right; }
  .bot { background: rgb(241, 245, 249); }
  .bar { display: flex; gap: 0.5rem; margin-top: 1rem; }
  input { flex: 1; padding: 0.6rem; border: 1px solid rgb(203, 213, 225); border-radius: 6px; }
  button { padding: 0.6rem 1.2rem; border: none; border-radius: 6px; background: rgb(37, 99, 235); color: white; cursor: pointer; }
  button:disabled { background: rgb(148, 163, 184); }
</style>
</head>
<body>
<main>
  <h1>Daniel AI Assistant</h1>
  <div class="chat" id="chat">
    <div class="msg bot">¡Hola! Soy Daniel. Pregúntame sobre infraestructura cloud o ciberseguridad.</div>
  </div>
  <div class="bar">
    <input id="question" type="text" placeholder="Escribe tu pregunta..." autofocus>
    <button id="send">Enviar</button>
  </div>
</main>
<script>
const chat = document.getElementById("chat");
const input = document.getElementById("question");
const send = document.getElementById("send");

function append(kind, text) {
  const div = document.createElement("div");
  div.className = "msg " + kind;
  div.textContent = text;
  chat.appendChild(div);
  chat.scrollTop = chat.scrollHeight;
}

async function ask() {
  const question = input.value.trim();
  if (!question) return;
  append("user", question);
  input.value = "";
  send.disabled = true;
  try {
    const res = await fetch("/api/ask", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ question })
    });
    const data = await res.json();
    append("bot", data.answer);
  } catch (err) {
    append("bot", "Lo siento, ocurrió un error al procesar tu pregunta");
  } finally {
    send.disabled = false;
    input.focus();
  }
}

send.addEventListener("click", ask);
input.addEventListener("keydown", (e) => { if (e.key === "Enter") ask(); });
</script>
</body>
</html>
"#;

/// `GET /`
pub async fn chat_page() -> Html<&'static str> {
    Html(CHAT_PAGE_HTML)
}
