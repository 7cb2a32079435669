pub mod in_memory;

#[cfg(test)]
mod test;
