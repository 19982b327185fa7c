mod center;
mod dialogs;
mod info;
mod side;
