use crate::db::models::{InsertOutcome, row_to_fields};
use crate::db::schema::SQLITE_INIT;
use crate::db::traits::TodoStore;
use crate::error::CruderError;
use async_trait::async_trait;
use cruder_query::Fields;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{Connection, SqliteConnection};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

#[derive(Debug)]
pub enum DbActorMessage {
    /// Run a data-modifying statement and report affected rows / last rowid.
    Execute(String, RpcReplyPort<Result<InsertOutcome, CruderError>>),

    /// Run a query and return all rows as column -> value mappings.
    Fetch(String, RpcReplyPort<Result<Vec<Fields>, CruderError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

#[async_trait]
impl TodoStore for DbActorHandle {
    async fn execute(&self, statement: String) -> Result<InsertOutcome, CruderError> {
        ractor::call!(self.actor, DbActorMessage::Execute, statement)
            .map_err(|e| CruderError::Actor(format!("DbActor Execute RPC failed: {e}")))?
    }

    async fn fetch_rows(&self, statement: String) -> Result<Vec<Fields>, CruderError> {
        ractor::call!(self.actor, DbActorMessage::Fetch, statement)
            .map_err(|e| CruderError::Actor(format!("DbActor Fetch RPC failed: {e}")))?
    }
}

/// One connection for the whole process; messages are handled one at a time.
struct DbActorState {
    conn: SqliteConnection,
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
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let mut conn = SqliteConnection::connect_with(&connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&mut conn)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { conn })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::Execute(statement, reply) => {
                let res = execute(&mut state.conn, &statement).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Fetch(statement, reply) => {
                let res = fetch_rows(&mut state.conn, &statement).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

// Ad-hoc statements are never reused, so they skip the prepared statement cache.
async fn execute(
    conn: &mut SqliteConnection,
    statement: &str,
) -> Result<InsertOutcome, CruderError> {
    debug!(statement, "Executing statement");
    let res = sqlx::query(statement)
        .persistent(false)
        .execute(conn)
        .await?;
    Ok(res.into())
}

async fn fetch_rows(
    conn: &mut SqliteConnection,
    statement: &str,
) -> Result<Vec<Fields>, CruderError> {
    debug!(statement, "Fetching rows");
    let rows = sqlx::query(statement)
        .persistent(false)
        .fetch_all(conn)
        .await?;

    rows.iter()
        .map(|row| row_to_fields(row).map_err(CruderError::from))
        .collect()
}

/// Open the database and spawn the actor owning its connection.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, CruderError> {
    // Unnamed: several databases may be open in one process (tests).
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| CruderError::Actor(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(conn: &mut SqliteConnection) -> Result<(), CruderError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(&mut *conn).await?;
    }
    Ok(())
}
