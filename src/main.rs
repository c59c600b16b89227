use std::rc::Rc;

use core_list::collections::contiguous::{OrderedCollection, SortOrder};

fn main() {
    println!("\n[OrderedCollection]\n");

    let mut list = OrderedCollection::new();
    println!("{list:?}");

    for i in [7_u8, 3, 9, 3, 1, 8, 2, 6, 5, 4, 0] {
        list.add(i);
    }
    println!("{list:?}");

    println!("max: {:?}, min: {:?}", list.max(), list.min());
    println!("ascending: {:?}", list.sorted(SortOrder::Ascending).to_vec());
    println!("descending: {:?}", list.sorted(SortOrder::Descending).to_vec());

    println!("\n[Removal During Traversal]\n");

    let mut cursor = list.cursor();
    while let Some(item) = cursor.advance(&list) {
        if *item % 2 == 1 {
            match list.remove_key(&item) {
                Ok(_) => println!("visit {item}, removed"),
                Err(err) => println!("visit {item}, {err}"),
            }
        } else {
            println!("visit {item}");
        }
    }
    println!("{:?}", list.to_vec());

    println!("\n[Identity]\n");

    let first = list.add(100);
    let second = Rc::new(100);
    list.push(Rc::clone(&second));
    println!(
        "first at {:?}, second at {:?}, stranger at {:?}",
        list.index_of(&first),
        list.index_of(&second),
        list.index_of(&Rc::new(100)),
    );

    match list.other_than_key(&first) {
        Ok(others) => println!("other than first: {:?}", others.to_vec()),
        Err(err) => println!("{err}"),
    }
}
