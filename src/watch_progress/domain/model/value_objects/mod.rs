pub mod playback_position;
pub mod video_id;
