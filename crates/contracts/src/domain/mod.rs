pub mod a001_page;
