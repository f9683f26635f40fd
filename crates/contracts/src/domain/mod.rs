pub mod a001_branch;
pub mod a002_room;
pub mod a003_seat;
pub mod a004_showtime;
pub mod a005_movie;
pub mod a006_voucher;
pub mod a007_refreshment;
pub mod a008_special_date;
pub mod a009_type_day;
pub mod common;
