use foreach::for_each;

fn readings() -> Vec<u8> {
    Vec::new()
}

fn main() {
    let mut sum: u32 = 0;
    for_each!(let reading: u32 in readings() {
        sum += reading;
    } else {
        sum = u32::MAX;
    });
}
