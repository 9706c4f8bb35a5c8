mod author;
mod book;
