pub mod about_service;
pub mod dress_service;
pub mod media_service;
pub mod slug_service;
pub mod storage_service;
pub mod upload_service;
