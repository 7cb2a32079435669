pub mod plain_text;
