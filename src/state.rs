use std::sync::Arc;

use crate::{
  db::Database,
  domains::{
    album::{
      repository::SqlxAlbumRepository,
      service::{AlbumService, AlbumServiceImpl},
    },
    post::{
      repository::SqlxPostRepository,
      service::{PostService, PostServiceImpl},
    },
    user::{
      placeholder::ProfilePlaceholders,
      repository::SqlxUserRepository,
      service::{UserService, UserServiceImpl},
    },
  },
};

#[derive(Clone)]
pub struct SharedAppState {
  pub user_service: Arc<dyn UserService>,
  pub album_service: Arc<dyn AlbumService>,
  pub post_service: Arc<dyn PostService>,
  pub placeholders: Arc<ProfilePlaceholders>,
}

impl SharedAppState {
  pub fn new(db: Database, placeholders: ProfilePlaceholders) -> Self {
    Self {
      user_service: Arc::new(UserServiceImpl::new(SqlxUserRepository::new(db.clone()))),
      album_service: Arc::new(AlbumServiceImpl::new(SqlxAlbumRepository::new(db.clone()))),
      post_service: Arc::new(PostServiceImpl::new(SqlxPostRepository::new(db))),
      placeholders: Arc::new(placeholders),
    }
  }
}
