//! In-memory [`AdmissionStore`] used by the unit tests.
//!
//! Mirrors the storage-level guarantees the PostgreSQL schema provides:
//! at most one open session per user and per spot, and lowest-numbered
//! free-spot assignment. A `fail_storage` switch makes every call error
//! so the controller's failure path can be exercised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use parkgate_core::error::AppError;
use parkgate_core::result::AppResult;
use parkgate_core::types::scope::Scope;
use parkgate_entity::block::Block;
use parkgate_entity::campus::Campus;
use parkgate_entity::session::{OpenSessionView, ParkingSession};
use parkgate_entity::spot::ParkingSpot;
use parkgate_entity::user::{User, UserRole};
use parkgate_entity::wall_code::WallCode;

use super::store::AdmissionStore;

#[derive(Default)]
struct State {
    campuses: Vec<Campus>,
    blocks: Vec<Block>,
    spots: Vec<ParkingSpot>,
    users: Vec<User>,
    wall_codes: Vec<WallCode>,
    sessions: Vec<ParkingSession>,
    next_session_id: i64,
}

pub(crate) struct MemoryStore {
    state: Mutex<State>,
    fail_storage: AtomicBool,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_session_id: 1,
                ..State::default()
            }),
            fail_storage: AtomicBool::new(false),
        }
    }

    pub(crate) fn add_campus(&self, id: i64, name: &str, short_code: &str) {
        self.state.lock().unwrap().campuses.push(Campus {
            id,
            name: name.to_string(),
            short_code: short_code.to_string(),
            created_at: Utc::now(),
        });
    }

    pub(crate) fn add_block(&self, id: i64, campus_id: i64, name: &str) {
        self.state.lock().unwrap().blocks.push(Block {
            id,
            campus_id,
            name: name.to_string(),
            created_at: Utc::now(),
        });
    }

    pub(crate) fn add_spot(
        &self,
        id: i64,
        campus_id: i64,
        block_id: Option<i64>,
        spot_number: &str,
        is_reserved: bool,
    ) {
        self.state.lock().unwrap().spots.push(ParkingSpot {
            id,
            campus_id,
            block_id,
            spot_number: spot_number.to_string(),
            is_reserved,
            created_at: Utc::now(),
        });
    }

    pub(crate) fn add_user(
        &self,
        id: i64,
        full_name: &str,
        email: &str,
        role: UserRole,
        home_campus_id: Option<i64>,
    ) {
        self.state.lock().unwrap().users.push(User {
            id,
            full_name: full_name.to_string(),
            email: email.to_string(),
            role,
            home_campus_id,
            parking_number: Some(format!("P-{id:03}")),
            created_at: Utc::now(),
        });
    }

    pub(crate) fn add_wall_code(&self, code: &str, campus_id: i64, block_id: Option<i64>) {
        let mut state = self.state.lock().unwrap();
        let id = state.wall_codes.len() as i64 + 1;
        state.wall_codes.push(WallCode {
            id,
            code: code.to_string(),
            campus_id,
            block_id,
            created_at: Utc::now(),
        });
    }

    pub(crate) fn fail_storage(&self) {
        self.fail_storage.store(true, Ordering::SeqCst);
    }

    pub(crate) fn open_session_count(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .sessions
            .iter()
            .filter(|s| s.is_open())
            .count()
    }

    pub(crate) fn session_count(&self) -> usize {
        self.state.lock().unwrap().sessions.len()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.fail_storage.load(Ordering::SeqCst) {
            return Err(AppError::database("Connection refused"));
        }
        Ok(())
    }

    fn view_for(state: &State, session: &ParkingSession) -> Option<OpenSessionView> {
        let user = state.users.iter().find(|u| u.id == session.user_id)?;
        let spot = state.spots.iter().find(|s| s.id == session.spot_id)?;
        let campus = state.campuses.iter().find(|c| c.id == spot.campus_id)?;
        let block_name = spot
            .block_id
            .and_then(|id| state.blocks.iter().find(|b| b.id == id))
            .map(|b| b.name.clone());
        Some(OpenSessionView {
            id: session.id,
            user_id: session.user_id,
            user_name: user.full_name.clone(),
            spot_id: spot.id,
            spot_number: spot.spot_number.clone(),
            campus_name: campus.name.clone(),
            block_name,
            entered_at: session.entered_at,
        })
    }
}

#[async_trait]
impl AdmissionStore for MemoryStore {
    async fn find_campus(&self, id: i64) -> AppResult<Option<Campus>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        Ok(state.campuses.iter().find(|c| c.id == id).cloned())
    }

    async fn find_campus_by_short_code(&self, short_code: &str) -> AppResult<Option<Campus>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .campuses
            .iter()
            .find(|c| c.short_code.eq_ignore_ascii_case(short_code))
            .cloned())
    }

    async fn find_block(&self, id: i64) -> AppResult<Option<Block>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        Ok(state.blocks.iter().find(|b| b.id == id).cloned())
    }

    async fn find_wall_code(&self, code: &str) -> AppResult<Option<WallCode>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        Ok(state.wall_codes.iter().find(|w| w.code == code).cloned())
    }

    async fn find_parker_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.role.may_park())
            .cloned())
    }

    async fn find_open_session(&self, user_id: i64) -> AppResult<Option<OpenSessionView>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .sessions
            .iter()
            .find(|s| s.user_id == user_id && s.is_open())
            .and_then(|s| Self::view_for(&state, s)))
    }

    async fn close_open_session(&self, user_id: i64) -> AppResult<Option<ParkingSession>> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        let session = state
            .sessions
            .iter_mut()
            .find(|s| s.user_id == user_id && s.is_open());
        Ok(session.map(|s| {
            s.exited_at = Some(Utc::now());
            s.clone()
        }))
    }

    async fn open_session_at_free_spot(
        &self,
        user_id: i64,
        scope: Scope,
    ) -> AppResult<Option<OpenSessionView>> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();

        if state
            .sessions
            .iter()
            .any(|s| s.user_id == user_id && s.is_open())
        {
            return Err(AppError::conflict("User already has an open session"));
        }

        let spot_id = state
            .spots
            .iter()
            .filter(|spot| {
                spot.campus_id == scope.campus_id
                    && scope.block_id.is_none_or(|b| spot.block_id == Some(b))
                    && !spot.is_reserved
                    && !state
                        .sessions
                        .iter()
                        .any(|s| s.spot_id == spot.id && s.is_open())
            })
            .min_by(|a, b| a.spot_number.cmp(&b.spot_number))
            .map(|spot| spot.id);

        let Some(spot_id) = spot_id else {
            return Ok(None);
        };

        let session = ParkingSession {
            id: state.next_session_id,
            user_id,
            spot_id,
            entered_at: Utc::now(),
            exited_at: None,
        };
        state.next_session_id += 1;
        state.sessions.push(session.clone());

        Ok(Self::view_for(&state, &session))
    }
}
