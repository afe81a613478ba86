use foreach::for_each;

fn main() {
    let rows = vec![vec![1, 0], vec![2]];
    for_each!('rows: let row in rows {
        for x in row {
            if *x == 0 {
                continue 'rows;
            }
        }
    });
}
