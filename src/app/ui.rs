mod center;
mod details;
mod dialogs;
mod icons;
mod info;
mod top;
