//! Repository layer for database operations

pub mod categories;
pub mod equipment;
pub mod requests;
pub mod teams;
pub mod users;
pub mod work_centers;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub teams: teams::TeamsRepository,
    pub categories: categories::CategoriesRepository,
    pub work_centers: work_centers::WorkCentersRepository,
    pub equipment: equipment::EquipmentRepository,
    pub requests: requests::RequestsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            teams: teams::TeamsRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            work_centers: work_centers::WorkCentersRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            requests: requests::RequestsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
