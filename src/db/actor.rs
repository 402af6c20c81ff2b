use crate::db::models::{DbCategory, DbQuestion};
use crate::db::schema::SQLITE_INIT;
use crate::error::TriviaError;
use crate::store::{NewQuestion, RecordStore};
use async_trait::async_trait;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};
use trivia_schema::{Category, Question};

#[derive(Debug)]
pub enum DbActorMessage {
    /// List all categories ordered by id.
    ListCategories(RpcReplyPort<Result<Vec<DbCategory>, TriviaError>>),

    /// List all questions ordered by id.
    ListQuestions(RpcReplyPort<Result<Vec<DbQuestion>, TriviaError>>),

    /// Get a question by id.
    GetQuestion(i64, RpcReplyPort<Result<Option<DbQuestion>, TriviaError>>),

    /// Insert a question and return its id.
    InsertQuestion(NewQuestion, RpcReplyPort<Result<i64, TriviaError>>),

    /// Delete a question by id.
    DeleteQuestion(i64, RpcReplyPort<Result<(), TriviaError>>),

    /// Insert missing categories by type; returns how many rows were added.
    SeedCategories(Vec<String>, RpcReplyPort<Result<u64, TriviaError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn seed_categories(&self, names: Vec<String>) -> Result<u64, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::SeedCategories, names).map_err(|e| {
            TriviaError::RactorError(format!("DbActor SeedCategories RPC failed: {e}"))
        })?
    }
}

#[async_trait]
impl RecordStore for DbActorHandle {
    async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let rows = ractor::call!(self.actor, DbActorMessage::ListCategories).map_err(|e| {
            TriviaError::RactorError(format!("DbActor ListCategories RPC failed: {e}"))
        })??;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, TriviaError> {
        let rows = ractor::call!(self.actor, DbActorMessage::ListQuestions).map_err(|e| {
            TriviaError::RactorError(format!("DbActor ListQuestions RPC failed: {e}"))
        })??;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, TriviaError> {
        let row = ractor::call!(self.actor, DbActorMessage::GetQuestion, id).map_err(|e| {
            TriviaError::RactorError(format!("DbActor GetQuestion RPC failed: {e}"))
        })??;
        Ok(row.map(Question::from))
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<i64, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::InsertQuestion, question).map_err(|e| {
            TriviaError::RactorError(format!("DbActor InsertQuestion RPC failed: {e}"))
        })?
    }

    async fn delete_question(&self, id: i64) -> Result<(), TriviaError> {
        ractor::call!(self.actor, DbActorMessage::DeleteQuestion, id).map_err(|e| {
            TriviaError::RactorError(format!("DbActor DeleteQuestion RPC failed: {e}"))
        })?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::ListCategories(reply) => {
                let res = self.list_categories(&state.pool).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListQuestions(reply) => {
                let res = self.list_questions(&state.pool).await;
                let _ = reply.send(res);
            }
            DbActorMessage::GetQuestion(id, reply) => {
                let res = self.get_question(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::InsertQuestion(question, reply) => {
                let res = self.insert_question(&state.pool, question).await;
                let _ = reply.send(res);
            }
            DbActorMessage::DeleteQuestion(id, reply) => {
                let res = self.delete_question(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::SeedCategories(names, reply) => {
                let res = self.seed_categories(&state.pool, names).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn list_categories(&self, pool: &SqlitePool) -> Result<Vec<DbCategory>, TriviaError> {
        let rows = sqlx::query_as::<_, DbCategory>(
            r#"
        SELECT id, type AS kind
        FROM categories
        ORDER BY id
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn list_questions(&self, pool: &SqlitePool) -> Result<Vec<DbQuestion>, TriviaError> {
        let rows = sqlx::query_as::<_, DbQuestion>(
            r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn get_question(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<DbQuestion>, TriviaError> {
        let row = sqlx::query_as::<_, DbQuestion>(
            r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn insert_question(
        &self,
        pool: &SqlitePool,
        question: NewQuestion,
    ) -> Result<i64, TriviaError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    async fn delete_question(&self, pool: &SqlitePool, id: i64) -> Result<(), TriviaError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TriviaError::QuestionNotFound(id));
        }
        Ok(())
    }

    async fn seed_categories(
        &self,
        pool: &SqlitePool,
        names: Vec<String>,
    ) -> Result<u64, TriviaError> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;
        for name in names {
            let result = sqlx::query("INSERT OR IGNORE INTO categories (type) VALUES (?)")
                .bind(&name)
                .execute(&mut *tx)
                .await?;
            if result.rows_affected() > 0 {
                debug!(category = %name, "seeded category");
            }
            inserted += result.rows_affected();
        }
        tx.commit().await?;

        Ok(inserted)
    }
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, TriviaError> {
    // Unnamed: several stores (one per database) may live in the same process.
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| TriviaError::RactorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), TriviaError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
