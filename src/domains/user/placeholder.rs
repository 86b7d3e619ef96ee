//! Stand-in city and week-day values for users that never provided them.
//!
//! Applied by the HTTP layer to outgoing users only; the filled values are
//! never written back to storage.

use std::sync::Mutex;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use super::model::User;

pub const CITIES: [&str; 5] = ["Rio de Janeiro", "São Paulo", "João Pessoa", "Salvador", "Brasília"];

pub const WEEK_DAYS: [&str; 7] = ["Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado"];

pub struct ProfilePlaceholders {
  rng: Mutex<StdRng>,
}

impl ProfilePlaceholders {
  pub fn new(seed: Option<u64>) -> Self {
    let rng = match seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    Self { rng: Mutex::new(rng) }
  }

  pub fn fill(&self, mut user: User) -> User {
    let missing_city = is_blank(&user.city);
    let missing_day = is_blank(&user.week_days);
    if !missing_city && !missing_day {
      return user;
    }

    let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if missing_city {
      user.city = CITIES.choose(&mut *rng).map(|city| city.to_string());
    }
    if missing_day {
      user.week_days = WEEK_DAYS.choose(&mut *rng).map(|day| day.to_string());
    }
    user
  }

  pub fn fill_all(&self, users: Vec<User>) -> Vec<User> {
    users.into_iter().map(|user| self.fill(user)).collect()
  }
}

fn is_blank(value: &Option<String>) -> bool {
  value.as_deref().map_or(true, str::is_empty)
}
