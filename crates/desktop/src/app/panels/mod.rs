mod features;
mod top;
