use crate::types::Student;

/// Formats a set of students as a count line followed by one line per record.
///
/// Every record line ends with a newline, including the last one. An empty
/// set renders as just the count line.
pub fn format_student_list(students: &[&Student]) -> String {
    let mut out = format!("找到 {} 名学生:\n", students.len());
    for student in students {
        out.push_str(&format!(
            "ID: {}, 姓名: {}, 年龄: {}, 年级: {}, 班级: {}\n",
            student.id, student.name, student.age, student.grade, student.section
        ));
    }
    out
}

/// Formats a single student as a multi-line detail block.
pub fn format_student_info(student: &Student) -> String {
    format!(
        "学生详细信息:\nID: {}\n姓名: {}\n年龄: {}\n年级: {}\n班级: {}",
        student.id, student.name, student.age, student.grade, student.section
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_student_list(&[]), "找到 0 名学生:\n");
    }

    #[test]
    fn test_format_list_lines() {
        let a = Student::new("1", "张三", 18, "高三", "A班");
        let b = Student::new("4", "赵六", 17, "高二", "A班");
        let text = format_student_list(&[&a, &b]);
        assert_eq!(
            text,
            "找到 2 名学生:\n\
             ID: 1, 姓名: 张三, 年龄: 18, 年级: 高三, 班级: A班\n\
             ID: 4, 姓名: 赵六, 年龄: 17, 年级: 高二, 班级: A班\n"
        );
    }

    #[test]
    fn test_format_info() {
        let s = Student::new("2", "李四", 17, "高二", "B班");
        assert_eq!(
            format_student_info(&s),
            "学生详细信息:\nID: 2\n姓名: 李四\n年龄: 17\n年级: 高二\n班级: B班"
        );
    }
}
