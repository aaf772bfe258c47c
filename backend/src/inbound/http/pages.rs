//! Static landing page.

use actix_web::{HttpResponse, get, http::header::ContentType};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Exercise Tracker</title>
    <style>
      body { font-family: sans-serif; margin: 2em auto; max-width: 40em; padding: 0 1em; }
      code { background: #eee; padding: 0.1em 0.3em; }
      form { margin: 1em 0; padding: 1em; border: 1px solid #ccc; }
      label { display: block; margin: 0.5em 0 0.2em; }
    </style>
  </head>
  <body>
    <h1>Exercise Tracker</h1>
    <form action="/api/users" method="post">
      <h2>Create a new user</h2>
      <p><code>POST /api/users</code></p>
      <label for="username">Username</label>
      <input id="username" type="text" name="username" placeholder="alice" />
      <input type="submit" value="Submit" />
    </form>
    <form id="exercise-form" method="post">
      <h2>Add an exercise</h2>
      <p><code>POST /api/users/:id/exercises</code></p>
      <label for="uid">User id</label>
      <input id="uid" type="text" name="id" placeholder="user id" />
      <label for="description">Description</label>
      <input id="description" type="text" name="description" placeholder="run" />
      <label for="duration">Duration (minutes)</label>
      <input id="duration" type="text" name="duration" placeholder="30" />
      <label for="date">Date (YYYY-MM-DD, optional)</label>
      <input id="date" type="text" name="date" />
      <input type="submit" value="Submit" />
    </form>
    <p>
      Retrieve a log with
      <code>GET /api/users/:id/logs?[from][&amp;to][&amp;limit]</code>.
    </p>
    <script>
      const form = document.getElementById('exercise-form');
      form.addEventListener('submit', () => {
        form.action = '/api/users/' + document.getElementById('uid').value + '/exercises';
      });
    </script>
  </body>
</html>
"#;

/// Landing page describing the API surface.
#[utoipa::path(
    get,
    path = "/",
    tags = ["pages"],
    responses(
        (status = 200, description = "Landing page")
    )
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
