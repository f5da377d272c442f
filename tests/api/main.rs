mod helpers;
mod site;
