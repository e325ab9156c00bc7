//! `PostgreSQL` repository implementation for account directory storage.

use super::{
    models::{AccountRow, NewAccountRow},
    schema::accounts,
};
use crate::account::{
    domain::{Account, AccountId, EmailAddress, PasswordHash, PersistedAccountData, Role},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by account adapters.
pub type AccountPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed account repository.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: AccountPgPool,
}

impl PostgresAccountRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AccountPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AccountRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AccountRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AccountRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AccountRepositoryError::persistence)?
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: &Account) -> AccountRepositoryResult<()> {
        let email = account.email().clone();
        let new_row = to_new_row(account);

        self.run_blocking(move |connection| {
            diesel::insert_into(accounts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AccountRepositoryError::DuplicateEmail(email.clone())
                    }
                    _ => AccountRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::id.eq(id.into_inner()))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountRepositoryError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn find_by_email_and_role(
        &self,
        email: &EmailAddress,
        role: Role,
    ) -> AccountRepositoryResult<Option<Account>> {
        let lookup_email = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::email.eq(lookup_email))
                .filter(accounts::role.eq(role.as_str()))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountRepositoryError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn list_by_role(&self, role: Role) -> AccountRepositoryResult<Vec<Account>> {
        self.run_blocking(move |connection| {
            let rows = accounts::table
                .filter(accounts::role.eq(role.as_str()))
                .order(accounts::created_at.asc())
                .select(AccountRow::as_select())
                .load::<AccountRow>(connection)
                .map_err(AccountRepositoryError::persistence)?;
            rows.into_iter().map(row_to_account).collect()
        })
        .await
    }
}

fn to_new_row(account: &Account) -> NewAccountRow {
    NewAccountRow {
        id: account.id().into_inner(),
        name: account.name().to_owned(),
        email: account.email().as_str().to_owned(),
        password_hash: account.password_hash().as_str().to_owned(),
        role: account.role().as_str().to_owned(),
        department: account.department().map(str::to_owned),
        position: account.position().map(str::to_owned),
        created_at: account.created_at(),
    }
}

fn row_to_account(row: AccountRow) -> AccountRepositoryResult<Account> {
    let email = EmailAddress::new(row.email).map_err(AccountRepositoryError::persistence)?;
    let role = Role::try_from(row.role.as_str()).map_err(AccountRepositoryError::persistence)?;

    let data = PersistedAccountData {
        id: AccountId::from_uuid(row.id),
        name: row.name,
        email,
        password_hash: PasswordHash::from_phc_string(row.password_hash),
        role,
        department: row.department,
        position: row.position,
        created_at: row.created_at,
    };
    Ok(Account::from_persisted(data))
}
