use crate::commands::AppContext;
use crate::output::Output;
use color_eyre::Result;
use reviews_models::{is_known_genre, ClassRecommendation};
use serde_json::{json, Map, Value};

pub struct AddArgs {
    pub id: Option<String>,
    pub title: String,
    pub rating: f64,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    pub class: Option<String>,
    pub audience: Option<String>,
    pub rewatchability: Option<String>,
    pub best_character: Option<String>,
    pub review: Option<String>,
    pub spoilers: Option<String>,
    pub review_date: Option<String>,
    pub tmdb_id: Option<i64>,
    pub poster_path: Option<String>,
}

impl AddArgs {
    /// Request body in the same shape the HTTP endpoint accepts.
    ///
    /// Without `--class`, the class suggested for the rating is used.
    pub fn to_body(&self) -> Value {
        let mut body = Map::new();
        let mut put = |key: &str, value: Option<&String>| {
            if let Some(value) = value {
                body.insert(key.to_string(), json!(value));
            }
        };
        put("id", self.id.as_ref());
        put("releaseDate", self.release_date.as_ref());
        put("intendedAudience", self.audience.as_ref());
        put("rewatchability", self.rewatchability.as_ref());
        put("bestCharacterWinner", self.best_character.as_ref());
        put("review", self.review.as_ref());
        put("spoilerReview", self.spoilers.as_ref());
        put("reviewDate", self.review_date.as_ref());
        put("posterPath", self.poster_path.as_ref());

        let class = self
            .class
            .clone()
            .map(ClassRecommendation::from)
            .unwrap_or_else(|| ClassRecommendation::suggest_for_rating(self.rating));

        body.insert("title".to_string(), json!(self.title));
        body.insert("rating".to_string(), json!(self.rating));
        body.insert("genres".to_string(), json!(self.genres));
        body.insert("classRecommendation".to_string(), json!(class));
        if let Some(tmdb_id) = self.tmdb_id {
            body.insert("tmdbId".to_string(), json!(tmdb_id));
        }
        Value::Object(body)
    }
}

pub async fn run_add(ctx: &AppContext, args: AddArgs, output: &Output) -> Result<()> {
    for genre in args.genres.iter().filter(|g| !is_known_genre(g)) {
        output.warn(format!("'{}' is not one of the standard genres", genre));
    }

    let catalog = ctx.catalog()?;
    let added = catalog.add(args.to_body()).await?;

    output.data(&json!({
        "message": "Review added successfully",
        "review": added.document,
    }));
    output.success(format!(
        "Added '{}' as {} ({})",
        added.record.title, added.record.id, added.record.class_recommendation
    ));
    Ok(())
}
