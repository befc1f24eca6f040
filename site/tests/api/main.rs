mod about;
mod api_issue_store;
mod archive;
mod health_check;
mod home;
mod issue;
