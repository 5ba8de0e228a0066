use axum::response::Html;

/// Landing page: a clickable index of every route the API serves.
pub async fn home() -> Html<&'static str> {
    Html(
        r#"<div>
 <h2>Valid Routes:</h2>
 <a href="/api/v1.0/precipitation">/api/v1.0/precipitation</a><br/>
 <a href="/api/v1.0/stations">/api/v1.0/stations</a><br/>
 <a href="/api/v1.0/tobs">/api/v1.0/tobs</a><br/>
 <a href="/api/v1.0/2012-02-28/">/api/v1.0/&lt;start&gt;</a><br/>
 <a href="/api/v1.0/2012-02-28/2012-03-05">/api/v1.0/&lt;start&gt;/&lt;end&gt;</a><br/>
</div>
"#,
    )
}
